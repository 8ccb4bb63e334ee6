use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reloomate_core::error::CoreError;
use reloomate_db::StoreError;

use crate::response::ApiEnvelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for profile
/// store failures. Implements [`IntoResponse`] to produce the standard
/// failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `reloomate_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the profile store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Message returned for every 500 so internals never reach clients.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// HTTP status and client-facing message for this error.
    fn classify(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(core) => classify_core(core),
            AppError::Store(StoreError::Core(core)) => classify_core(core),
            AppError::Store(StoreError::Database(err)) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.classify();
        ApiEnvelope::<()>::failure(status, message).into_response()
    }
}

fn classify_core(core: &CoreError) -> (StatusCode, String) {
    match core {
        CoreError::NotFound(entity) => (StatusCode::NOT_FOUND, format!("{entity} not found")),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
    }
}

/// `RowNotFound` maps to 404; everything else is a sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
    }
}
