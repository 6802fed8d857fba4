//! User use cases on top of `user_actions`.

use diesel::prelude::*;

use crate::error::ServiceError;
use crate::models::{Order, User, UserForm};
use crate::orders::order_actions;
use crate::users::user_actions;

pub fn list_users(conn: &mut SqliteConnection) -> Result<Vec<User>, ServiceError> {
    log::info!("transaction start: listing all users");
    let users = user_actions::find_all_users(conn)
        .inspect_err(|e| log::error!("failed to list users: {}", e))?;
    log::info!("transaction end: listed {} users", users.len());
    Ok(users)
}

pub fn find_user(user_id: i32, conn: &mut SqliteConnection) -> Result<User, ServiceError> {
    log::info!("transaction start: looking up user {}", user_id);
    let user = user_actions::find_user_by_id(user_id, conn)
        .inspect_err(|e| log::error!("failed to look up user {}: {}", user_id, e))?;
    match user {
        Some(user) => {
            log::info!("transaction end: user {} found: {:?}", user_id, user);
            Ok(user)
        }
        None => {
            log::warn!("transaction end: user {} not found", user_id);
            Err(ServiceError::not_found("user", user_id))
        }
    }
}

pub fn find_user_by_email(email: &str, conn: &mut SqliteConnection) -> Result<User, ServiceError> {
    log::info!("transaction start: looking up user with email {}", email);
    let user = user_actions::find_user_by_email(email, conn)
        .inspect_err(|e| log::error!("failed to look up user with email {}: {}", email, e))?;
    match user {
        Some(user) => {
            log::info!("transaction end: user with email {} found: {:?}", email, user);
            Ok(user)
        }
        None => {
            log::warn!("transaction end: user with email {} not found", email);
            Err(ServiceError::not_found("user", email))
        }
    }
}

/// The user plus every order it owns. No orders is an empty vec.
pub fn find_user_with_orders(
    user_id: i32,
    conn: &mut SqliteConnection,
) -> Result<(User, Vec<Order>), ServiceError> {
    let user = find_user(user_id, conn)?;
    let orders = order_actions::find_orders_for_user(&user, conn)
        .inspect_err(|e| log::error!("failed to load orders of user {}: {}", user_id, e))?;
    Ok((user, orders))
}

/// Stores a new user; storage assigns the id.
pub fn create_user(mut form: UserForm, conn: &mut SqliteConnection) -> Result<User, ServiceError> {
    form.id = None;
    log::info!("transaction start: saving new user {:?}", form);
    let saved = user_actions::save_user(&form, conn)
        .inspect_err(|e| log::error!("failed to save user {:?}: {}", form, e))?;
    log::info!("transaction end: user created with id {}", saved.id);
    Ok(saved)
}

/// Full replace: the stored row takes every field of `form`, with the id
/// forced to `user_id`. Fields missing from `form` end up NULL.
pub fn replace_user(
    user_id: i32,
    mut form: UserForm,
    conn: &mut SqliteConnection,
) -> Result<User, ServiceError> {
    conn.transaction::<_, ServiceError, _>(|conn| {
        find_user(user_id, conn)?;

        form.id = Some(user_id);
        let saved = user_actions::save_user(&form, conn)
            .inspect_err(|e| log::error!("failed to replace user {}: {}", user_id, e))?;
        log::info!("transaction end: user {} replaced", user_id);
        Ok(saved)
    })
}

/// Deletes the user and, in the same transaction, every order it owns.
pub fn delete_user(user_id: i32, conn: &mut SqliteConnection) -> Result<(), ServiceError> {
    log::warn!("transaction start: deleting user {}", user_id);
    conn.transaction::<_, ServiceError, _>(|conn| {
        let exists = user_actions::exists_user(user_id, conn)
            .inspect_err(|e| log::error!("failed to look up user {}: {}", user_id, e))?;
        if !exists {
            log::warn!("transaction end: user {} not found for delete", user_id);
            return Err(ServiceError::not_found("user", user_id));
        }

        let orders = order_actions::delete_orders_for_user(user_id, conn)
            .inspect_err(|e| log::error!("failed to delete orders of user {}: {}", user_id, e))?;
        user_actions::delete_user_by_id(user_id, conn)
            .inspect_err(|e| log::error!("failed to delete user {}: {}", user_id, e))?;
        log::warn!(
            "transaction end: user {} deleted along with {} orders",
            user_id,
            orders
        );
        Ok(())
    })
}
