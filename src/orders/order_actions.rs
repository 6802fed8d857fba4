//! Diesel queries over the `orders` table.

use diesel::dsl::exists;
use diesel::expression::IntoSql;
use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};

use crate::models::{NewOrder, Order, OrderForm, User};

pub fn find_all_orders(conn: &mut SqliteConnection) -> QueryResult<Vec<Order>> {
    use crate::schema::orders::dsl::*;

    orders.order(id.asc()).select(Order::as_select()).load(conn)
}

/// Find order by id. If not found then return None.
pub fn find_order_by_id(order_id: i32, conn: &mut SqliteConnection) -> QueryResult<Option<Order>> {
    use crate::schema::orders::dsl::*;

    orders
        .find(order_id)
        .select(Order::as_select())
        .first(conn)
        .optional()
}

/// Find order by id together with the user owning it, in one join.
pub fn find_order_with_user(
    order_id: i32,
    conn: &mut SqliteConnection,
) -> QueryResult<Option<(Order, User)>> {
    use crate::schema::{orders, users};

    orders::table
        .inner_join(users::table)
        .filter(orders::id.eq(order_id))
        .select((Order::as_select(), User::as_select()))
        .first(conn)
        .optional()
}

pub fn find_orders_for_user(owner: &User, conn: &mut SqliteConnection) -> QueryResult<Vec<Order>> {
    use crate::schema::orders::dsl::*;

    Order::belonging_to(owner)
        .order(id.asc())
        .select(Order::as_select())
        .load(conn)
}

pub fn exists_order(order_id: i32, conn: &mut SqliteConnection) -> QueryResult<bool> {
    use crate::schema::orders::dsl::*;

    diesel::select(exists(orders.find(order_id))).get_result(conn)
}

/// Insert the order when it carries no id, otherwise overwrite item, quantity
/// and value of the stored row. The owning user is never changed here.
///
/// A form without an item reaches the database as NULL, both ways, and is
/// rejected there by the NOT NULL constraint.
pub fn save_order(form: &OrderForm, conn: &mut SqliteConnection) -> QueryResult<Order> {
    use crate::schema::orders::dsl::*;

    match form.id {
        None => diesel::insert_into(orders)
            .values(NewOrder::from(form))
            .returning(Order::as_returning())
            .get_result(conn),
        Some(order_id) => {
            // bound as nullable text so NULL is sent instead of skipped
            let new_item = form
                .item
                .as_deref()
                .into_sql::<Nullable<Text>>()
                .assume_not_null();

            diesel::update(orders.find(order_id))
                .set((
                    item.eq(new_item),
                    quantity.eq(form.quantity),
                    value.eq(form.value),
                ))
                .returning(Order::as_returning())
                .get_result(conn)
        }
    }
}

pub fn delete_order_by_id(order_id: i32, conn: &mut SqliteConnection) -> QueryResult<usize> {
    use crate::schema::orders::dsl::*;

    diesel::delete(orders.find(order_id)).execute(conn)
}

pub fn delete_orders_for_user(owner_id: i32, conn: &mut SqliteConnection) -> QueryResult<usize> {
    use crate::schema::orders::dsl::*;

    diesel::delete(orders.filter(user_id.eq(owner_id))).execute(conn)
}
