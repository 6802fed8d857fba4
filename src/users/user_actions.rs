//! Diesel queries over the `users` table.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::models::{User, UserForm};

pub fn find_all_users(conn: &mut SqliteConnection) -> QueryResult<Vec<User>> {
    use crate::schema::users::dsl::*;

    users.order(id.asc()).select(User::as_select()).load(conn)
}

/// Find user by id. If not found then return None.
pub fn find_user_by_id(user_id: i32, conn: &mut SqliteConnection) -> QueryResult<Option<User>> {
    use crate::schema::users::dsl::*;

    users
        .find(user_id)
        .select(User::as_select())
        .first(conn)
        .optional()
}

/// Find user by email. If not found then return None.
pub fn find_user_by_email(
    email_str: &str,
    conn: &mut SqliteConnection,
) -> QueryResult<Option<User>> {
    // Schema imports stay inside the function so `email` the column doesn't
    // collide with anything at module level.
    use crate::schema::users::dsl::*;

    users
        .filter(email.eq(email_str))
        .select(User::as_select())
        .first(conn)
        .optional()
}

pub fn exists_user(user_id: i32, conn: &mut SqliteConnection) -> QueryResult<bool> {
    use crate::schema::users::dsl::*;

    diesel::select(exists(users.find(user_id))).get_result(conn)
}

/// Insert the user when it carries no id, otherwise replace every column of
/// the stored row. Absent fields are written as NULL in both cases.
pub fn save_user(form: &UserForm, conn: &mut SqliteConnection) -> QueryResult<User> {
    use crate::schema::users::dsl::*;

    let columns = (name.eq(&form.name), email.eq(&form.email));
    match form.id {
        None => diesel::insert_into(users)
            .values(columns)
            .returning(User::as_returning())
            .get_result(conn),
        Some(user_id) => diesel::update(users.find(user_id))
            .set(columns)
            .returning(User::as_returning())
            .get_result(conn),
    }
}

pub fn delete_user_by_id(user_id: i32, conn: &mut SqliteConnection) -> QueryResult<usize> {
    use crate::schema::users::dsl::*;

    diesel::delete(users.find(user_id)).execute(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_connection;

    fn ana() -> UserForm {
        UserForm {
            id: None,
            name: Some("Ana".to_owned()),
            email: Some("ana@x.com".to_owned()),
        }
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut conn = test_connection();

        let first = save_user(&ana(), &mut conn).unwrap();
        let second = save_user(&UserForm::default(), &mut conn).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(first.name.as_deref(), Some("Ana"));
        assert_eq!(second.id, 2);
        assert_eq!(second.name, None);
        assert_eq!(second.email, None);
    }

    #[test]
    fn lookups_by_id_and_email() {
        let mut conn = test_connection();
        let saved = save_user(&ana(), &mut conn).unwrap();

        assert_eq!(find_user_by_id(saved.id, &mut conn).unwrap(), Some(saved.clone()));
        assert_eq!(find_user_by_email("ana@x.com", &mut conn).unwrap(), Some(saved.clone()));
        assert_eq!(find_user_by_email("bob@x.com", &mut conn).unwrap(), None);
        assert_eq!(find_user_by_id(saved.id + 1, &mut conn).unwrap(), None);
        assert!(exists_user(saved.id, &mut conn).unwrap());
        assert!(!exists_user(saved.id + 1, &mut conn).unwrap());
    }

    #[test]
    fn update_replaces_every_column() {
        let mut conn = test_connection();
        let saved = save_user(&ana(), &mut conn).unwrap();

        let replaced = save_user(
            &UserForm {
                id: Some(saved.id),
                name: Some("Ana Maria".to_owned()),
                email: None,
            },
            &mut conn,
        )
        .unwrap();

        assert_eq!(
            replaced,
            User {
                id: saved.id,
                name: Some("Ana Maria".to_owned()),
                email: None,
            }
        );
        assert_eq!(find_all_users(&mut conn).unwrap(), vec![replaced]);
    }

    #[test]
    fn delete_reports_affected_rows() {
        let mut conn = test_connection();
        let saved = save_user(&ana(), &mut conn).unwrap();

        assert_eq!(delete_user_by_id(saved.id, &mut conn).unwrap(), 1);
        assert_eq!(delete_user_by_id(saved.id, &mut conn).unwrap(), 0);
        assert!(find_all_users(&mut conn).unwrap().is_empty());
    }
}
