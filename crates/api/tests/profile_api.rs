//! Integration tests for `GET`/`PUT /api/users/profile`.
//!
//! Covers the authentication gate (401 without reaching the store) and the
//! pass-through to the profile store.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    bearer_for, body_json, get, get_auth, put_json, put_json_auth, put_raw_auth, BrokenStore,
    CountingStore,
};
use reloomate_api::auth::jwt::{generate_access_token, JwtConfig};
use reloomate_db::{MemoryProfileStore, ProfileStore};
use serde_json::json;

const PROFILE: &str = "/api/users/profile";

/// Store seeded with one profile owned by user 7.
async fn seeded_store() -> Arc<CountingStore> {
    let inner = MemoryProfileStore::new();
    inner.create(7, "Ada Lovelace", "ada@uni.edu").await;
    Arc::new(CountingStore::new(inner))
}

// ---------------------------------------------------------------------------
// Authentication gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_without_header_is_401_and_store_untouched() {
    let store = seeded_store().await;
    let app = common::build_test_app(store.clone());

    let response = get(app, PROFILE).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Missing Authorization header");
    assert!(json.get("data").is_none());
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn put_without_header_is_401_and_store_untouched() {
    let store = seeded_store().await;
    let app = common::build_test_app(store.clone());

    let response = put_json(app, PROFILE, json!({ "name": "Mallory" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(store.calls(), 0);

    let unchanged = store.inner.get_profile(7).await.unwrap().unwrap();
    assert_eq!(unchanged.name, "Ada Lovelace");
}

#[tokio::test]
async fn wrong_scheme_is_401() {
    let store = seeded_store().await;
    let app = common::build_test_app(store.clone());

    let response = get_auth(app, PROFILE, "Token abc").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Invalid Authorization format. Expected: Bearer <token>"
    );
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn token_signed_with_other_secret_is_401() {
    let store = seeded_store().await;
    let app = common::build_test_app(store.clone());

    let foreign = JwtConfig {
        secret: "someone-elses-secret".to_string(),
        access_token_expiry_mins: 15,
    };
    let token = generate_access_token(7, &foreign).unwrap();

    let response = get_auth(app, PROFILE, &format!("Bearer {token}")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid or expired token");
    assert_eq!(store.calls(), 0);
}

// ---------------------------------------------------------------------------
// GET /api/users/profile
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_returns_callers_profile() {
    let store = seeded_store().await;
    let app = common::build_test_app(store.clone());

    let response = get_auth(app, PROFILE, &bearer_for(7)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Profile retrieved successfully");
    assert_eq!(json["data"]["userId"], 7);
    assert_eq!(json["data"]["name"], "Ada Lovelace");
    assert_eq!(json["data"]["email"], "ada@uni.edu");
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn get_unknown_profile_is_404() {
    let store = seeded_store().await;
    let app = common::build_test_app(store.clone());

    let response = get_auth(app, PROFILE, &bearer_for(8)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "User profile not found");
}

#[tokio::test]
async fn store_failure_is_sanitized_500() {
    let app = common::build_test_app(Arc::new(BrokenStore));

    let response = get_auth(app, PROFILE, &bearer_for(7)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "An internal error occurred");
    assert!(json.get("error").is_none());
}

// ---------------------------------------------------------------------------
// PUT /api/users/profile
// ---------------------------------------------------------------------------

#[tokio::test]
async fn put_applies_partial_update() {
    let store = seeded_store().await;
    let app = common::build_test_app(store.clone());

    let body = json!({ "university": "Imperial College", "bio": "Night owl, tidy." });
    let response = put_json_auth(app, PROFILE, body, &bearer_for(7)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Profile updated successfully");
    assert_eq!(json["data"]["university"], "Imperial College");
    assert_eq!(json["data"]["bio"], "Night owl, tidy.");
    assert_eq!(json["data"]["name"], "Ada Lovelace");
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn put_invalid_payload_is_400() {
    let store = seeded_store().await;
    let app = common::build_test_app(store.clone());

    let response = put_json_auth(app, PROFILE, json!({ "email": "nope" }), &bearer_for(7)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn put_malformed_json_is_400_envelope() {
    let store = seeded_store().await;
    let app = common::build_test_app(store.clone());

    let response = put_raw_auth(app, PROFILE, "{not json", &bearer_for(7)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn put_unknown_profile_is_404() {
    let store = seeded_store().await;
    let app = common::build_test_app(store.clone());

    let response = put_json_auth(app, PROFILE, json!({ "name": "Bo" }), &bearer_for(99)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
