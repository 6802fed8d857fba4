//! Connection pool and schema setup.
//!
//! Diesel is blocking, so handlers never touch a connection on the server's
//! thread: `with_conn` checks one out and runs the closure on actix's blocking
//! thread pool.

use actix_web::web;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, PoolError};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use thiserror::Error;

use crate::error::ServiceError;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to create pool: {0}")]
    Pool(#[from] PoolError),

    #[error("failed to run migrations: {0}")]
    Migration(Box<dyn std::error::Error + Send + Sync>),
}

/// SQLite leaves foreign keys unenforced unless asked, per connection.
#[derive(Debug)]
struct ConnectionOptions;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

/// Builds the pool and brings the schema up to date.
pub fn init_pool(database_url: &str, max_size: u32) -> Result<DbPool, DbError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)?;

    let mut conn = pool.get()?;
    run_migrations(&mut conn)?;

    Ok(pool)
}

pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), DbError> {
    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(DbError::Migration)?;
    for version in applied {
        log::info!("applied migration {}", version);
    }
    Ok(())
}

/// Runs `f` with a pooled connection on the blocking thread pool.
pub async fn with_conn<F, T>(pool: web::Data<DbPool>, f: F) -> Result<T, ServiceError>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    web::block(move || {
        let mut conn = pool.get()?;
        f(&mut conn)
    })
    .await?
}

/// A private in-memory database with the schema applied.
#[cfg(test)]
pub(crate) fn test_connection() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:").expect("in-memory sqlite");
    conn.batch_execute("PRAGMA foreign_keys = ON;")
        .expect("enable foreign keys");
    run_migrations(&mut conn).expect("migrations");
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_enforces_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.db");
        let pool = init_pool(path.to_str().unwrap(), 2).unwrap();
        let mut conn = pool.get().unwrap();

        let orphan = conn.batch_execute("INSERT INTO orders (item, user_id) VALUES ('Ticket', 42);");
        assert!(orphan.is_err());
    }

    #[test]
    fn migrations_are_idempotent() {
        let mut conn = test_connection();
        run_migrations(&mut conn).unwrap();
    }
}
