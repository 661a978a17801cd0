//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures unexpected errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`. Every error response is a JSON object with an
//! `error` field and, where useful, a lower-level `detail` field.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing required field, detected before persistence.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Mutation attempted on the virtual "All" store.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Referenced row absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique-constraint collision.
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        detail: Option<String>,
    },

    /// Repository operation failed.
    #[error("Database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// JSON error envelope returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Repository(err) => match err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Conflict(_) => StatusCode::CONFLICT,
                RepositoryError::ForeignKey(_) => StatusCode::BAD_REQUEST,
                RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            Self::InvalidArgument(message)
            | Self::Forbidden(message)
            | Self::NotFound(message) => ErrorBody {
                error: message.clone(),
                detail: None,
            },
            Self::Conflict { message, detail } => ErrorBody {
                error: message.clone(),
                detail: detail.clone(),
            },
            Self::Repository(err) => match err {
                RepositoryError::NotFound => ErrorBody {
                    error: "Not found".to_owned(),
                    detail: None,
                },
                RepositoryError::Conflict(detail) => ErrorBody {
                    error: "Conflict".to_owned(),
                    detail: Some(detail.clone()),
                },
                RepositoryError::ForeignKey(detail) => ErrorBody {
                    error: "Referenced row not found".to_owned(),
                    detail: Some(detail.clone()),
                },
                // Don't expose internal error details to clients
                RepositoryError::Database(_) => ErrorBody {
                    error: "Internal server error".to_owned(),
                    detail: None,
                },
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture unexpected persistence failures to Sentry
        if matches!(self, Self::Repository(RepositoryError::Database(_))) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        (self.status(), Json(self.body())).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Store not found".to_string());
        assert_eq!(err.to_string(), "Not found: Store not found");

        let err = AppError::InvalidArgument("Invalid zone_sequence".to_string());
        assert_eq!(err.to_string(), "Invalid argument: Invalid zone_sequence");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::InvalidArgument("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Forbidden("test".to_string())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Conflict {
                message: "test".to_string(),
                detail: None,
            }),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_repository_error_status_codes() {
        assert_eq!(
            get_status(AppError::Repository(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Repository(RepositoryError::Conflict(
                "dup".to_string()
            ))),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Repository(RepositoryError::ForeignKey(
                "missing".to_string()
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Repository(RepositoryError::Database(
                sqlx::Error::PoolTimedOut
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = AppError::Conflict {
            message: "Department already assigned to this zone".to_string(),
            detail: Some("duplicate key".to_string()),
        }
        .body();
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json["error"], "Department already assigned to this zone");
        assert_eq!(json["detail"], "duplicate key");
    }

    #[test]
    fn test_internal_detail_not_leaked() {
        let body = AppError::Repository(RepositoryError::Database(sqlx::Error::PoolTimedOut)).body();
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json["error"], "Internal server error");
        assert!(json.get("detail").is_none());
    }
}
