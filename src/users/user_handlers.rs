//! `/users` endpoints. Storage work runs on the blocking thread pool via
//! `db::with_conn`, same as the order handlers.

use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::db::{self, DbPool};
use crate::error::ServiceError;
use crate::models::UserForm;
use crate::users::user_models::{UserDetail, UserPayload, UserSummary};
use crate::users::user_service;

/// Lists every user, without their orders.
#[get("/users")]
pub async fn list_users(pool: web::Data<DbPool>) -> Result<HttpResponse, ServiceError> {
    log::info!("request received: GET /users");

    let users = db::with_conn(pool, user_service::list_users).await?;
    let summaries: Vec<UserSummary> = users.into_iter().map(UserSummary::from).collect();

    log::info!("response sent: GET /users - status {}", StatusCode::OK);
    Ok(HttpResponse::Ok().json(summaries))
}

#[get("/users/email/{email}")]
pub async fn get_user_by_email(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let email = path.into_inner();
    log::info!("request received: GET /users/email/{}", email);

    let lookup = email.clone();
    let user = db::with_conn(pool, move |conn| {
        user_service::find_user_by_email(&lookup, conn)
    })
    .await
    .map(UserSummary::from)?;

    log::info!(
        "response sent: GET /users/email/{} - status {}",
        email,
        StatusCode::OK
    );
    Ok(HttpResponse::Ok().json(user))
}

/// Finds user by id, with a summary of each order it owns.
#[get("/users/detalhe-usuario/{id}")]
pub async fn get_user_detail(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = path.into_inner();
    log::info!("request received: GET /users/detalhe-usuario/{}", user_id);

    let detail = db::with_conn(pool, move |conn| {
        user_service::find_user_with_orders(user_id, conn)
    })
    .await
    .map(UserDetail::from)?;

    log::info!(
        "response sent: GET /users/detalhe-usuario/{} - status {}",
        user_id,
        StatusCode::OK
    );
    Ok(HttpResponse::Ok().json(detail))
}

#[post("/users")]
pub async fn create_user(
    pool: web::Data<DbPool>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, ServiceError> {
    log::info!("request received: POST /users - body {:?}", body);

    let form = UserForm::from(body.into_inner());
    let user = db::with_conn(pool, move |conn| user_service::create_user(form, conn))
        .await
        .map(UserSummary::from)?;

    log::info!(
        "response sent: POST /users - status {}, body {:?}",
        StatusCode::CREATED,
        user
    );
    Ok(HttpResponse::Created().json(user))
}

/// Replaces every field of an existing user with the body.
#[put("/users/{id}")]
pub async fn replace_user(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = path.into_inner();
    log::info!("request received: PUT /users/{} - body {:?}", user_id, body);

    let form = UserForm::from(body.into_inner());
    let user = db::with_conn(pool, move |conn| {
        user_service::replace_user(user_id, form, conn)
    })
    .await
    .map(UserSummary::from)?;

    log::info!(
        "response sent: PUT /users/{} - status {}, body {:?}",
        user_id,
        StatusCode::OK,
        user
    );
    Ok(HttpResponse::Ok().json(user))
}

/// Deletes the user together with its orders.
#[delete("/users/{id}")]
pub async fn delete_user(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = path.into_inner();
    log::warn!("request received: DELETE /users/{}", user_id);

    db::with_conn(pool, move |conn| user_service::delete_user(user_id, conn)).await?;

    log::info!(
        "response sent: DELETE /users/{} - status {}",
        user_id,
        StatusCode::NO_CONTENT
    );
    Ok(HttpResponse::NoContent().finish())
}
