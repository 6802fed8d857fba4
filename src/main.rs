use std::io;

use actix_web::{middleware, web, App, HttpServer};

use tickets_api::config::Config;
use tickets_api::db;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // set up database connection pool
    let pool = db::init_pool(&config.database_url, config.pool_size).map_err(io::Error::other)?;
    let pool = web::Data::new(pool);

    log::info!("starting server at: {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(pool.clone())
            .wrap(middleware::Logger::default())
            .configure(tickets_api::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
