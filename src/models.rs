use diesel::prelude::*;

use crate::schema::orders;
use crate::schema::users;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(belongs_to(User))]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Order {
    pub id: i32,
    pub item: String,
    pub quantity: Option<i32>,
    pub value: Option<f64>,
    pub user_id: i32,
}

/// A user as handed to `save_user`. Without an id it is inserted, with one
/// every column of that row is replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// An order as handed to `save_order`. Without an id it is inserted, with one
/// the mutable columns (item, quantity, value) of that row are overwritten.
/// A missing item is written as NULL and left to the NOT NULL constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub id: Option<i32>,
    pub item: Option<String>,
    pub quantity: Option<i32>,
    pub value: Option<f64>,
    // Left to the NOT NULL / foreign key constraints when missing or unknown.
    pub user_id: Option<i32>,
}

impl From<User> for UserForm {
    fn from(user: User) -> Self {
        UserForm {
            id: Some(user.id),
            name: user.name,
            email: user.email,
        }
    }
}

impl From<Order> for OrderForm {
    fn from(order: Order) -> Self {
        OrderForm {
            id: Some(order.id),
            item: Some(order.item),
            quantity: order.quantity,
            value: order.value,
            user_id: Some(order.user_id),
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub(crate) struct NewOrder<'a> {
    pub item: Option<&'a str>,
    pub quantity: Option<i32>,
    pub value: Option<f64>,
    pub user_id: Option<i32>,
}

impl<'a> From<&'a OrderForm> for NewOrder<'a> {
    fn from(form: &'a OrderForm) -> Self {
        NewOrder {
            item: form.item.as_deref(),
            quantity: form.quantity,
            value: form.value,
            user_id: form.user_id,
        }
    }
}
