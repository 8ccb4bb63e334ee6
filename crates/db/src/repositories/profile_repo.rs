//! Repository for the `user_profiles` table.

use reloomate_core::profile::UpdateProfile;
use reloomate_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::UserProfile;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, email, phone, university, bio, avatar_url, \
                        created_at, updated_at";

/// Provides profile lookups and partial updates keyed by `user_id`.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a profile for a user, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        name: &str,
        email: &str,
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles (user_id, name, email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(name)
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Find the profile owned by `user_id`.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a profile. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the user has no profile.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                university = COALESCE($5, university),
                bio = COALESCE($6, bio),
                avatar_url = COALESCE($7, avatar_url),
                updated_at = now()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.university)
            .bind(&input.bio)
            .bind(&input.avatar_url)
            .fetch_optional(pool)
            .await
    }
}
