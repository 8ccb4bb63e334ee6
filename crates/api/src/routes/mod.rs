pub mod health;
pub mod onboarding;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /onboarding                  onboarding content (public)
///
/// /users/profile               get, update (requires auth)
/// ```
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/onboarding", onboarding::router())
        .nest("/users", users::router(state))
}
