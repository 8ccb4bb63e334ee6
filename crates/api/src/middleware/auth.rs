//! JWT-based authentication gate for protected routes.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use reloomate_core::error::CoreError;
use reloomate_core::types::DbId;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller, attached to the request by [`require_auth`].
///
/// Use this as an extractor parameter in any handler mounted behind the
/// gate:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    /// The user's id (from `claims.sub`).
    pub user_id: DbId,
}

/// Validate the `Authorization: Bearer <token>` header.
pub fn authenticate(headers: &HeaderMap, jwt: &JwtConfig) -> Result<AuthUser, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })?;

    let claims = validate_token(token.trim(), jwt).map_err(|e| {
        tracing::debug!(error = %e, "Rejected access token");
        AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
    })?;

    Ok(AuthUser {
        user_id: claims.sub,
    })
}

/// Route layer that short-circuits unauthenticated requests with 401 and
/// otherwise inserts [`AuthUser`] into the request extensions.
///
/// ```ignore
/// Router::new()
///     .route("/profile", get(get_profile))
///     .route_layer(from_fn_with_state(state.clone(), require_auth))
/// ```
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(req.headers(), &state.config.jwt)?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().copied().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Authentication required".into(),
            ))
        })
    }
}
