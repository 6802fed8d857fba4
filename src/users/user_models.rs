use serde::{Deserialize, Serialize};

use crate::models::{Order, User, UserForm};
use crate::orders::order_models::OrderSummary;

/// Body of `POST /users` and `PUT /users/{id}`. `idUser` and `orders` sent by
/// the caller are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<UserPayload> for UserForm {
    fn from(payload: UserPayload) -> Self {
        UserForm {
            id: None,
            name: payload.name,
            email: payload.email,
        }
    }
}

/// A user without its orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id_user: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// `GET /users/detalhe-usuario/{id}`. There is no email at this level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    pub id_user: i32,
    pub name: Option<String>,
    pub orders: Vec<OrderSummary>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        UserSummary {
            id_user: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

impl From<(User, Vec<Order>)> for UserDetail {
    fn from((user, orders): (User, Vec<Order>)) -> Self {
        UserDetail {
            id_user: user.id,
            name: user.name,
            orders: orders.into_iter().map(OrderSummary::from).collect(),
        }
    }
}
