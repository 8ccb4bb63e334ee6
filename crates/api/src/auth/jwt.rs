//! JWT access-token generation and validation.
//!
//! Access tokens are HS256-signed JWTs containing a [`Claims`] payload. Token
//! issuance belongs to the identity service; [`generate_access_token`] exists
//! for operators and tests.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use reloomate_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{parse_or, ConfigError};

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 15).
    pub access_token_expiry_mins: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry_mins", &self.access_token_expiry_mins)
            .finish()
    }
}

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;

/// Longest accepted access token lifetime: one year.
const MAX_ACCESS_EXPIRY_MINS: i64 = 60 * 24 * 365;

impl JwtConfig {
    /// Load JWT configuration through a key lookup.
    ///
    /// | Env Var                  | Required | Default |
    /// |--------------------------|----------|---------|
    /// | `JWT_SECRET`             | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS` | no       | `15`    |
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let access_token_expiry_mins: i64 = parse_or(
            "JWT_ACCESS_EXPIRY_MINS",
            get("JWT_ACCESS_EXPIRY_MINS"),
            DEFAULT_ACCESS_EXPIRY_MINS,
        )?;
        if !(1..=MAX_ACCESS_EXPIRY_MINS).contains(&access_token_expiry_mins) {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY_MINS",
                reason: format!("must be between 1 and {MAX_ACCESS_EXPIRY_MINS}"),
            });
        }

        Ok(Self {
            secret,
            access_token_expiry_mins,
        })
    }
}

/// Generate an HS256 access token for the given user.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = config
        .access_token_expiry_mins
        .saturating_mul(60)
        .saturating_add(now);

    let claims = Claims {
        sub: user_id,
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
