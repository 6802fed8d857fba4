//! Diesel operations are blocking, so every handler runs its storage work
//! through `db::with_conn`, which offloads it to actix's blocking thread pool
//! instead of the server's thread.

use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::db::{self, DbPool};
use crate::error::ServiceError;
use crate::orders::order_models::{OrderDetail, OrderPayload, OrderSummary, OrderView};
use crate::orders::order_service;

/// Lists every order, without user information.
#[get("/orders")]
pub async fn list_orders(pool: web::Data<DbPool>) -> Result<HttpResponse, ServiceError> {
    log::info!("request received: GET /orders");

    let orders = db::with_conn(pool, order_service::list_orders).await?;
    let summaries: Vec<OrderSummary> = orders.into_iter().map(OrderSummary::from).collect();

    log::info!("response sent: GET /orders - status {}", StatusCode::OK);
    Ok(HttpResponse::Ok().json(summaries))
}

/// Finds order by id, flattened together with the id and name of its user.
#[get("/orders/detalhe/{id}")]
pub async fn get_order_detail(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let order_id = path.into_inner();
    log::info!("request received: GET /orders/detalhe/{}", order_id);

    let detail = db::with_conn(pool, move |conn| {
        order_service::find_order_with_user(order_id, conn)
    })
    .await
    .map(OrderDetail::from)?;

    log::info!(
        "response sent: GET /orders/detalhe/{} - status {}, body {:?}",
        order_id,
        StatusCode::OK,
        detail
    );
    Ok(HttpResponse::Ok().json(detail))
}

/// Inserts new order for the user referenced in the body.
#[post("/orders")]
pub async fn create_order(
    pool: web::Data<DbPool>,
    body: web::Json<OrderPayload>,
) -> Result<HttpResponse, ServiceError> {
    log::info!("request received: POST /orders - body {:?}", body);

    let form = body.into_inner().into_form();
    let order = db::with_conn(pool, move |conn| order_service::create_order(form, conn))
        .await
        .map(OrderView::from)?;

    log::info!(
        "response sent: POST /orders - status {}, body {:?}",
        StatusCode::CREATED,
        order
    );
    Ok(HttpResponse::Created().json(order))
}

/// Overwrites item, quantity and value of an existing order.
#[put("/orders/{id}")]
pub async fn update_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<OrderPayload>,
) -> Result<HttpResponse, ServiceError> {
    let order_id = path.into_inner();
    log::info!("request received: PUT /orders/{} - body {:?}", order_id, body);

    let changes = body.into_inner().into_form();
    let order = db::with_conn(pool, move |conn| {
        order_service::update_order(order_id, changes, conn)
    })
    .await
    .map(OrderView::from)?;

    log::info!(
        "response sent: PUT /orders/{} - status {}, body {:?}",
        order_id,
        StatusCode::OK,
        order
    );
    Ok(HttpResponse::Ok().json(order))
}

#[delete("/orders/{id}")]
pub async fn delete_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let order_id = path.into_inner();
    log::warn!("request received: DELETE /orders/{}", order_id);

    db::with_conn(pool, move |conn| order_service::delete_order(order_id, conn)).await?;

    log::info!(
        "response sent: DELETE /orders/{} - status {}",
        order_id,
        StatusCode::NO_CONTENT
    );
    Ok(HttpResponse::NoContent().finish())
}
