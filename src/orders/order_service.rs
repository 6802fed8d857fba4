//! Order use cases on top of `order_actions`. Failures are logged here and
//! handed up unchanged; turning them into statuses is the handlers' job.

use diesel::prelude::*;

use crate::error::ServiceError;
use crate::models::{Order, OrderForm, User};
use crate::orders::order_actions;

pub fn list_orders(conn: &mut SqliteConnection) -> Result<Vec<Order>, ServiceError> {
    log::info!("listing all orders");
    let orders = order_actions::find_all_orders(conn)
        .inspect_err(|e| log::error!("failed to list orders: {}", e))?;
    log::info!("listed {} orders", orders.len());
    Ok(orders)
}

/// The order and its owner, fetched with one join.
pub fn find_order_with_user(
    order_id: i32,
    conn: &mut SqliteConnection,
) -> Result<(Order, User), ServiceError> {
    log::info!("looking up order {} with its user", order_id);
    order_actions::find_order_with_user(order_id, conn)
        .inspect_err(|e| log::error!("failed to look up order {}: {}", order_id, e))?
        .ok_or_else(|| {
            log::warn!("order {} not found", order_id);
            ServiceError::not_found("order", order_id)
        })
}

/// Stores a new order; storage assigns the id and checks the owner exists.
pub fn create_order(
    mut form: OrderForm,
    conn: &mut SqliteConnection,
) -> Result<(Order, User), ServiceError> {
    form.id = None;
    conn.transaction::<_, ServiceError, _>(|conn| {
        let saved = order_actions::save_order(&form, conn)
            .inspect_err(|e| log::error!("failed to save order {:?}: {}", form, e))?;
        log::info!("order created with id {}", saved.id);
        find_order_with_user(saved.id, conn)
    })
}

/// Field-merge update: item, quantity and value are copied from `changes`
/// onto the stored order. Its id and owner are kept. The existence check runs
/// first, so a missing order is NotFound whatever `changes` holds.
pub fn update_order(
    order_id: i32,
    changes: OrderForm,
    conn: &mut SqliteConnection,
) -> Result<(Order, User), ServiceError> {
    conn.transaction::<_, ServiceError, _>(|conn| {
        let order = order_actions::find_order_by_id(order_id, conn)
            .inspect_err(|e| log::error!("failed to look up order {}: {}", order_id, e))?
            .ok_or_else(|| {
                log::warn!("order {} not found for update", order_id);
                ServiceError::not_found("order", order_id)
            })?;

        let mut merged = OrderForm::from(order);
        merged.item = changes.item;
        merged.quantity = changes.quantity;
        merged.value = changes.value;

        let saved = order_actions::save_order(&merged, conn)
            .inspect_err(|e| log::error!("failed to update order {}: {}", order_id, e))?;
        log::info!("order {} updated", saved.id);
        find_order_with_user(saved.id, conn)
    })
}

pub fn delete_order(order_id: i32, conn: &mut SqliteConnection) -> Result<(), ServiceError> {
    let exists = order_actions::exists_order(order_id, conn)
        .inspect_err(|e| log::error!("failed to look up order {}: {}", order_id, e))?;
    if !exists {
        log::warn!("order {} not found for delete", order_id);
        return Err(ServiceError::not_found("order", order_id));
    }

    order_actions::delete_order_by_id(order_id, conn)
        .inspect_err(|e| log::error!("failed to delete order {}: {}", order_id, e))?;
    log::warn!("order {} deleted", order_id);
    Ok(())
}
