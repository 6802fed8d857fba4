//! Orders and users over HTTP, stored through Diesel.

use actix_web::web;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schema;

pub mod orders {
    pub mod order_actions;
    pub mod order_handlers;
    pub mod order_models;
    pub mod order_service;
}

pub mod users {
    pub mod user_actions;
    pub mod user_handlers;
    pub mod user_models;
    pub mod user_service;
}

use error::ServiceError;

/// Registers every endpoint. The app must provide `web::Data<db::DbPool>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ServiceError::Validation(err.to_string()).into());

    cfg.app_data(json_config)
        .service(orders::order_handlers::list_orders)
        .service(orders::order_handlers::get_order_detail)
        .service(orders::order_handlers::create_order)
        .service(orders::order_handlers::update_order)
        .service(orders::order_handlers::delete_order)
        .service(users::user_handlers::list_users)
        .service(users::user_handlers::get_user_by_email)
        .service(users::user_handlers::get_user_detail)
        .service(users::user_handlers::create_user)
        .service(users::user_handlers::replace_user)
        .service(users::user_handlers::delete_user);
}
