#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {0}")]
    NotFound(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
