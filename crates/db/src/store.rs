//! The profile collaborator behind `GET`/`PUT /api/users/profile`.

use async_trait::async_trait;
use reloomate_core::profile::{validate_update, UpdateProfile};
use reloomate_core::types::DbId;

use crate::error::StoreError;
use crate::models::profile::UserProfile;
use crate::repositories::ProfileRepo;
use crate::DbPool;

/// Reads and updates the profile owned by an authenticated user.
///
/// Implementations own validation of [`UpdateProfile`]; handlers pass the
/// payload through untouched.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the caller's profile, `None` if they have not created one.
    async fn get_profile(&self, user_id: DbId) -> Result<Option<UserProfile>, StoreError>;

    /// Apply a partial update, `None` if the caller has no profile.
    async fn update_profile(
        &self,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<UserProfile>, StoreError>;

    /// Confirm the backing storage is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// PostgreSQL-backed store over [`ProfileRepo`].
#[derive(Debug, Clone)]
pub struct PgProfileStore {
    pool: DbPool,
}

impl PgProfileStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get_profile(&self, user_id: DbId) -> Result<Option<UserProfile>, StoreError> {
        Ok(ProfileRepo::find_by_user_id(&self.pool, user_id).await?)
    }

    async fn update_profile(
        &self,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<UserProfile>, StoreError> {
        validate_update(input)?;
        if input.is_empty() {
            return self.get_profile(user_id).await;
        }
        Ok(ProfileRepo::update(&self.pool, user_id, input).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
