//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource and
//! writes its result as an [`ApiEnvelope`](crate::response::ApiEnvelope).

pub mod onboarding;
pub mod profile;

use axum::http::StatusCode;

use crate::response::ApiEnvelope;

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiEnvelope<()> {
    ApiEnvelope::failure(StatusCode::NOT_FOUND, "Route not found")
}
