//! JSON shapes for the `/orders` endpoints. Each endpoint has its own
//! response type, so a field only shows up where it is declared.

use serde::{Deserialize, Serialize};

use crate::models::{Order, OrderForm, User};
use crate::users::user_models::UserSummary;

/// Reference to the owning user inside an order body. Only the id is read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id_user: Option<i32>,
}

/// Body of `POST /orders` and `PUT /orders/{id}`. Every field may be left
/// out; a missing item is for storage to reject. An `idOrder` sent by the
/// caller is ignored; `user` only matters on creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub item: Option<String>,
    pub quantity: Option<i32>,
    pub value: Option<f64>,
    pub user: Option<UserRef>,
}

impl OrderPayload {
    pub fn into_form(self) -> OrderForm {
        OrderForm {
            id: None,
            item: self.item,
            quantity: self.quantity,
            value: self.value,
            user_id: self.user.and_then(|u| u.id_user),
        }
    }
}

/// `GET /orders` element, and the nested order of a user detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id_order: i32,
    pub item: String,
    pub quantity: Option<i32>,
    pub value: Option<f64>,
}

/// `GET /orders/detalhe/{id}`: the order flattened with its owner's id and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id_order: i32,
    pub item: String,
    pub quantity: Option<i32>,
    pub value: Option<f64>,
    pub user_id: i32,
    pub user_name: Option<String>,
}

/// The stored order as returned by create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id_order: i32,
    pub item: String,
    pub quantity: Option<i32>,
    pub value: Option<f64>,
    pub user: UserSummary,
}

impl From<Order> for OrderSummary {
    fn from(order: Order) -> Self {
        OrderSummary {
            id_order: order.id,
            item: order.item,
            quantity: order.quantity,
            value: order.value,
        }
    }
}

impl From<(Order, User)> for OrderDetail {
    fn from((order, user): (Order, User)) -> Self {
        OrderDetail {
            id_order: order.id,
            item: order.item,
            quantity: order.quantity,
            value: order.value,
            user_id: user.id,
            user_name: user.name,
        }
    }
}

impl From<(Order, User)> for OrderView {
    fn from((order, user): (Order, User)) -> Self {
        OrderView {
            id_order: order.id,
            item: order.item,
            quantity: order.quantity,
            value: order.value,
            user: UserSummary::from(user),
        }
    }
}
