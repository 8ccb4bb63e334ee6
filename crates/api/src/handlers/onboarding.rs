//! Handler for the public onboarding catalog.
//!
//! The payload is serialized inside the handler so a serialization fault is
//! caught here and turned into a 500 envelope rather than escaping as a
//! bare error from the `Json` responder.

use axum::extract::State;
use serde::Serialize;
use serde_json::value::RawValue;

use crate::config::AppEnvironment;
use crate::response::ApiEnvelope;
use crate::state::AppState;

pub const ONBOARDING_RETRIEVED: &str = "Onboarding content retrieved successfully";
pub const ONBOARDING_FAILED: &str = "Error retrieving onboarding content";

// ---------------------------------------------------------------------------
// GET /api/onboarding
// ---------------------------------------------------------------------------

/// Return the onboarding steps and their count. Public, no parameters.
pub async fn get_onboarding_content(State(state): State<AppState>) -> ApiEnvelope<Box<RawValue>> {
    render_onboarding(&state.onboarding.content(), state.config.environment)
}

/// Serialize `payload` into a success envelope, or a 500 envelope if
/// serialization fails. The fault text is included only in development.
pub fn render_onboarding<P>(payload: &P, environment: AppEnvironment) -> ApiEnvelope<Box<RawValue>>
where
    P: Serialize + ?Sized,
{
    match serde_json::value::to_raw_value(payload) {
        Ok(data) => ApiEnvelope::ok(ONBOARDING_RETRIEVED, data),
        Err(err) => {
            tracing::error!(error = %err, %environment, "Get onboarding content error");
            ApiEnvelope::fault(ONBOARDING_FAILED, &err, environment)
        }
    }
}
