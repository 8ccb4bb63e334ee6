use reloomate_core::error::CoreError;

/// Errors surfaced by a [`crate::ProfileStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain rule rejected the request (e.g. invalid update payload).
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
