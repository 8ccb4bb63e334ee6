//! User profile entity model.

use reloomate_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full row from the `user_profiles` table. Safe to serialize as-is.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: DbId,
    /// Identity the authentication gate attaches to the request.
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub university: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
