use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chronolog_core::error::CoreError;
use chronolog_db::DbError;
use serde_json::json;

use crate::recorder::RecorderError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `chronolog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading time logs failed.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Forwarding to the recorder failed.
    #[error(transparent)]
    Recorder(#[from] RecorderError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::Recorder(RecorderError::NonJson { status }) => {
                tracing::error!(status, "Recorder returned non-JSON response");
                json!({
                    "error": "Recorder returned non-JSON response",
                    "code": "BAD_GATEWAY",
                    "status": status,
                })
            }
            other => {
                tracing::error!(error = %other, "Collector error");
                json!({
                    "error": other.to_string(),
                    "code": error_code(other),
                })
            }
        };

        (self.status_code(), axum::Json(body)).into_response()
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Recorder(RecorderError::NonJson { .. }) => StatusCode::BAD_GATEWAY,
            AppError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn error_code(err: &AppError) -> &'static str {
    match err {
        AppError::Core(CoreError::Validation(_)) => "VALIDATION_ERROR",
        AppError::Core(CoreError::Internal(_)) => "INTERNAL_ERROR",
        AppError::Database(_) => "DATABASE_ERROR",
        AppError::Recorder(RecorderError::NonJson { .. }) => "BAD_GATEWAY",
        AppError::Recorder(RecorderError::Request(_)) => "RECORDER_UNREACHABLE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_json_reply_is_bad_gateway() {
        let err = AppError::Recorder(RecorderError::NonJson { status: 200 });
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn database_errors_are_internal() {
        let err = AppError::Database(DbError::Closed);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_code(&err), "DATABASE_ERROR");
        assert_eq!(err.to_string(), "Database error: Connection is closed");
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = AppError::Core(CoreError::Validation("nope".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
