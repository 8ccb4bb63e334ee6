//! Route definitions for the `/users` resource.
//!
//! Mounted at `/users` by `api_routes()`. Every route here is gated by
//! `require_auth`.

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// User routes (require auth).
///
/// ```text
/// GET    /profile    -> get_profile
/// PUT    /profile    -> update_profile
/// ```
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth))
}
