//! Error handling - maps failures onto the `{"detail": ...}` response bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use contents_core::error::{InputError, RepoError};
use contents_shared::DetailResponse;
use std::fmt;

/// Application-level error type returned by every handler.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    InvalidInput(InputError),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::InvalidInput(err) => write!(f, "Invalid input: {}", err),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => {
                HttpResponse::build(self.status_code()).json(DetailResponse::not_found())
            }
            // Syntax and shape failures share one label on the wire.
            AppError::InvalidInput(err) => {
                tracing::debug!("Rejected request body: {}", err);
                HttpResponse::build(self.status_code()).json(DetailResponse::invalid_json())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::build(self.status_code()).finish()
            }
        }
    }
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        AppError::InvalidInput(err)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound,
            RepoError::Connection(msg) => {
                AppError::Internal(format!("Database connection error: {}", msg))
            }
            RepoError::Query(msg) => AppError::Internal(format!("Database query error: {}", msg)),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_not_found_body() {
        let res = AppError::from(RepoError::NotFound).error_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(res.into_body()).await.unwrap();
        assert_eq!(body.as_ref(), br#"{"detail":"Not found"}"#);
    }

    #[actix_web::test]
    async fn test_field_errors_use_invalid_json_label() {
        let err = InputError::Invalid(vec![contents_core::FieldError::new(
            "title",
            "field required",
        )]);
        let res = AppError::from(err).error_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(res.into_body()).await.unwrap();
        assert_eq!(body.as_ref(), br#"{"detail":"Invalid JSON"}"#);
    }

    #[actix_web::test]
    async fn test_storage_failure_has_empty_body() {
        let res = AppError::from(RepoError::Query("boom".to_string())).error_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(res.into_body()).await.unwrap();
        assert!(body.is_empty());
    }
}
