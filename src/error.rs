use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use diesel::r2d2::PoolError;
use thiserror::Error;

/// Everything a request can fail with. Each variant maps to one status code
/// and the cause never leaves the process: responses carry an empty body.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("invalid request body: {0}")]
    Validation(String),

    #[error("couldn't get db connection from pool: {0}")]
    StorageUnavailable(#[from] PoolError),

    #[error("storage failure: {0}")]
    Storage(#[from] diesel::result::Error),

    #[error("blocking task failed: {0}")]
    Blocking(#[from] BlockingError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        ServiceError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Storage(_) | ServiceError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("request failed with {}: {}", status, self);
        } else {
            log::warn!("request rejected with {}: {}", status, self);
        }
        HttpResponse::build(status).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::body::MessageBody;
    use diesel::r2d2::{self, ConnectionManager};
    use diesel::SqliteConnection;

    use super::*;

    /// A checkout failure from a pool whose database can't be opened.
    fn pool_error() -> PoolError {
        let manager =
            ConnectionManager::<SqliteConnection>::new("/nonexistent/tickets-dir/tickets.db");
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .connection_timeout(Duration::from_millis(200))
            .build_unchecked(manager);
        pool.get().err().expect("opening the database must fail")
    }

    #[test]
    fn statuses_follow_the_error_kind() {
        assert_eq!(
            ServiceError::not_found("order", 999).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Validation("expected value".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Storage(diesel::result::Error::RollbackTransaction).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServiceError::from(pool_error()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn error_response_hides_the_cause() {
        let err = ServiceError::Storage(diesel::result::Error::NotFound);
        let resp = err.error_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = resp.into_body().try_into_bytes().unwrap_or_default();
        assert!(body.is_empty());
    }

    #[test]
    fn not_found_names_entity_and_key() {
        let err = ServiceError::not_found("user", "ana@x.com");
        assert_eq!(err.to_string(), "user ana@x.com not found");
    }
}
