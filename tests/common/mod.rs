use tempfile::TempDir;
use tickets_api::db::{self, DbPool};

/// A pool over a fresh SQLite file. The directory goes away with the value.
pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

pub fn test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("tickets.db");
    let pool = db::init_pool(path.to_str().expect("utf-8 path"), 4).expect("pool");
    TestDb { pool, _dir: dir }
}

/// Builds the app with every route over the given pool.
macro_rules! init_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .configure(tickets_api::configure),
        )
        .await
    };
}

/// Sends a `TestRequest` builder through the app.
macro_rules! call {
    ($app:expr, $req:expr) => {
        actix_web::test::call_service(&$app, $req.to_request()).await
    };
}
