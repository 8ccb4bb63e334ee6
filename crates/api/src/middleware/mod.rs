//! Authentication middleware and extractors.
//!
//! - [`auth::require_auth`] -- Route layer rejecting requests without a valid
//!   Bearer token.
//! - [`auth::AuthUser`] -- Extracts the identity attached by `require_auth`.

pub mod auth;
