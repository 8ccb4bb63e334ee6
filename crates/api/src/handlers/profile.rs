//! Handlers for the authenticated caller's profile.
//!
//! Both endpoints sit behind [`require_auth`](crate::middleware::auth::require_auth)
//! and pass straight through to the injected
//! [`ProfileStore`](reloomate_db::ProfileStore), which owns validation.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use reloomate_core::error::CoreError;
use reloomate_core::profile::UpdateProfile;
use reloomate_db::models::profile::UserProfile;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiEnvelope;
use crate::state::AppState;

/// Entity label used in 404 messages.
const PROFILE_ENTITY: &str = "User profile";

// ---------------------------------------------------------------------------
// GET /api/users/profile
// ---------------------------------------------------------------------------

/// Get the authenticated user's profile.
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiEnvelope<UserProfile>> {
    let profile = state
        .profiles
        .get_profile(auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound(PROFILE_ENTITY)))?;

    tracing::debug!(user_id = auth.user_id, "Fetched profile");

    Ok(ApiEnvelope::ok("Profile retrieved successfully", profile))
}

// ---------------------------------------------------------------------------
// PUT /api/users/profile
// ---------------------------------------------------------------------------

/// Partially update the authenticated user's profile.
///
/// Malformed JSON is reported through the envelope as a 400 rather than
/// axum's plain-text rejection.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<UpdateProfile>, JsonRejection>,
) -> AppResult<ApiEnvelope<UserProfile>> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let updated = state
        .profiles
        .update_profile(auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound(PROFILE_ENTITY)))?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    Ok(ApiEnvelope::ok("Profile updated successfully", updated))
}
