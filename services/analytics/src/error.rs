//! Central error type for the analytics service HTTP surface

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::{AnalyticsError, SessionError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Temporarily unavailable: {0}")]
    Transient(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<AnalyticsError> for AppError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::Session(e) => e.into(),
            AnalyticsError::BookNotFound { book_id } => {
                AppError::NotFound(format!("Book {}", book_id))
            }
            // Contention past the retry budget is transient; the caller
            // may retry once but must not loop.
            AnalyticsError::Contended { .. } => AppError::Transient(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::RateLimitExceeded(msg) => {
                (StatusCode::TOO_MANY_REQUESTS, msg, "RATE_LIMIT_EXCEEDED")
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
            AppError::Transient(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg, "TRANSIENT"),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                "INTERNAL_ERROR",
            ),
        };

        let body = Json(json!({
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_maps_to_bad_request() {
        let err: AppError = SessionError::ProgressOutOfRange { progress: 120 }.into();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_contended_maps_to_transient() {
        let err: AppError = AnalyticsError::Contended {
            book_id: "b".to_string(),
            attempts: 8,
        }
        .into();
        assert!(matches!(err, AppError::Transient(_)));
    }

    #[test]
    fn test_book_not_found_maps_to_not_found() {
        let err: AppError = AnalyticsError::BookNotFound {
            book_id: "b".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
