use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use bankadvice_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the shape `{ "error", "code", "entity"? }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bankadvice_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let entity = match &self {
            AppError::Core(core) => core.entity(),
            _ => None,
        };

        let (status, code, message) = match &self {
            AppError::Core(core) => {
                let status = match core {
                    CoreError::IdAlreadyExists { .. }
                    | CoreError::IdNull { .. }
                    | CoreError::IdMismatch { .. }
                    | CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                    CoreError::NotFound { .. } | CoreError::ProfileNotLinked { .. } => {
                        StatusCode::NOT_FOUND
                    }
                    CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                    CoreError::Forbidden(_) => StatusCode::FORBIDDEN,
                    CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let message = if matches!(core, CoreError::Internal(_)) {
                    tracing::error!(error = %core, "Internal core error");
                    "An internal error occurred".to_string()
                } else {
                    core.to_string()
                };
                (status, core.code(), message)
            }

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "badrequest", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(entity) = entity {
            body["entity"] = json!(entity);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Not-null and foreign-key violations map to 400 (a transfer object
///   missing a required reference, or pointing at a row that is gone).
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "idnotfound",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            match db_err.code().as_deref() {
                // PostgreSQL unique constraint violation.
                Some("23505") => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    if constraint.starts_with("uq_") {
                        return (
                            StatusCode::CONFLICT,
                            "conflict",
                            format!("Duplicate value violates unique constraint: {constraint}"),
                        );
                    }
                }
                // Not-null violation: a required field was absent.
                Some("23502") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "validation",
                        format!("Missing required field: {}", db_err.message()),
                    );
                }
                // Foreign-key violation: a reference points nowhere.
                Some("23503") => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    return (
                        StatusCode::BAD_REQUEST,
                        "validation",
                        format!("Invalid reference violates constraint: {constraint}"),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "An internal error occurred".to_string(),
            )
        }
    }
}
