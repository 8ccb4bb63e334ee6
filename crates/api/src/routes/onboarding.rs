//! Route definitions for the public onboarding catalog.
//!
//! Mounted at `/onboarding` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Onboarding routes. No authentication.
///
/// ```text
/// GET    /           -> get_onboarding_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(onboarding::get_onboarding_content))
}
