#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use reloomate_api::auth::jwt::{generate_access_token, JwtConfig};
use reloomate_api::config::{AppEnvironment, ServerConfig};
use reloomate_api::router::build_app_router;
use reloomate_api::state::AppState;
use reloomate_core::onboarding::OnboardingCatalog;
use reloomate_core::profile::UpdateProfile;
use reloomate_core::types::DbId;
use reloomate_db::models::profile::UserProfile;
use reloomate_db::{MemoryProfileStore, ProfileStore, StoreError};

/// Secret shared by the test app and [`bearer_for`].
pub const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(environment: AppEnvironment) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        jwt: test_jwt(),
        onboarding_catalog_path: None,
        database_url: None,
    }
}

pub fn test_jwt() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Build the full application router over the given profile store.
pub fn build_test_app(profiles: Arc<dyn ProfileStore>) -> Router {
    build_test_app_with(AppEnvironment::Test, profiles)
}

pub fn build_test_app_with(environment: AppEnvironment, profiles: Arc<dyn ProfileStore>) -> Router {
    let state = AppState::new(
        test_config(environment),
        OnboardingCatalog::builtin(),
        profiles,
    );
    build_app_router(state)
}

/// A valid `Authorization` header value for `user_id`.
pub fn bearer_for(user_id: DbId) -> String {
    let token = generate_access_token(user_id, &test_jwt()).expect("token generation");
    format!("Bearer {token}")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, authorization: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", authorization)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_raw_auth(
    app: Router,
    uri: &str,
    body: &str,
    authorization: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", authorization)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    authorization: &str,
) -> Response<Body> {
    put_raw_auth(app, uri, &body.to_string(), authorization).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

/// Wraps a [`MemoryProfileStore`] and counts calls that reach it.
#[derive(Default)]
pub struct CountingStore {
    pub inner: MemoryProfileStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: MemoryProfileStore) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for CountingStore {
    async fn get_profile(&self, user_id: DbId) -> Result<Option<UserProfile>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_profile(user_id).await
    }

    async fn update_profile(
        &self,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<UserProfile>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update_profile(user_id, input).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.inner.health_check().await
    }
}

/// A store whose every call fails with a database error.
pub struct BrokenStore;

#[async_trait]
impl ProfileStore for BrokenStore {
    async fn get_profile(&self, _user_id: DbId) -> Result<Option<UserProfile>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update_profile(
        &self,
        _user_id: DbId,
        _input: &UpdateProfile,
    ) -> Result<Option<UserProfile>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}
