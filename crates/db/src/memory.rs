//! In-memory profile store.
//!
//! Profiles live in a `BTreeMap` behind a `RwLock` and are lost when the
//! process exits. Used by the test suite and by the binary when no
//! `DATABASE_URL` is configured.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reloomate_core::profile::{validate_update, UpdateProfile};
use reloomate_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::profile::UserProfile;
use crate::store::ProfileStore;

/// Profiles keyed by `user_id`.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profiles: Arc<RwLock<BTreeMap<DbId, UserProfile>>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) the profile for `user_id`.
    pub async fn create(&self, user_id: DbId, name: &str, email: &str) -> UserProfile {
        let now = Utc::now();
        let profile = UserProfile {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            user_id,
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            university: None,
            bio: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        };
        self.profiles.write().await.insert(user_id, profile.clone());
        profile
    }
}

/// Overwrite `target` with `value` when an update supplies one.
fn apply(target: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        *target = Some(v.clone());
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get_profile(&self, user_id: DbId) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn update_profile(
        &self,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<UserProfile>, StoreError> {
        validate_update(input)?;

        let mut profiles = self.profiles.write().await;
        let Some(profile) = profiles.get_mut(&user_id) else {
            return Ok(None);
        };
        if input.is_empty() {
            return Ok(Some(profile.clone()));
        }

        if let Some(name) = &input.name {
            profile.name.clone_from(name);
        }
        if let Some(email) = &input.email {
            profile.email.clone_from(email);
        }
        apply(&mut profile.phone, &input.phone);
        apply(&mut profile.university, &input.university);
        apply(&mut profile.bio, &input.bio);
        apply(&mut profile.avatar_url, &input.avatar_url);
        profile.updated_at = Utc::now();

        Ok(Some(profile.clone()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
