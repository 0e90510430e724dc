//! Bearer token generation and validation.
//!
//! Tokens are HS256-signed JWTs containing a [`Claims`] payload. The token
//! string is also persisted verbatim in the `admin_tokens` table, so a
//! request is authenticated only when the signature verifies AND the stored
//! row is unexpired -- either mechanism alone can invalidate a token.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every bearer token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the administrator's username.
    pub sub: String,
    /// Administrator flag. Always true for minted tokens; carried so the
    /// decoded payload states the principal's capability explicitly.
    pub admin: bool,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Configuration for token generation and validation.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in minutes (default: 120).
    pub token_ttl_mins: i64,
}

/// Default token expiry in minutes (2 hours).
const DEFAULT_TOKEN_TTL_MINS: i64 = 120;

impl AuthConfig {
    /// Load auth configuration from environment variables.
    ///
    /// | Env Var          | Required | Default |
    /// |------------------|----------|---------|
    /// | `AUTH_SECRET`    | **yes**  | --      |
    /// | `TOKEN_TTL_MINS` | no       | `120`   |
    ///
    /// # Panics
    ///
    /// Panics if `AUTH_SECRET` is not set or is empty. There is no
    /// fallback secret; misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("AUTH_SECRET").expect("AUTH_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "AUTH_SECRET must not be empty");

        let token_ttl_mins: i64 = std::env::var("TOKEN_TTL_MINS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_MINS.to_string())
            .parse()
            .expect("TOKEN_TTL_MINS must be a valid i64");

        Self {
            secret,
            token_ttl_mins,
        }
    }
}

/// Generate an HS256 bearer token for the given administrator.
pub fn generate_token(
    username: &str,
    config: &AuthConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.token_ttl_mins * 60;

    let claims = Claims {
        sub: username.to_string(),
        admin: true,
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

/// Validate and decode a bearer token, returning the embedded [`Claims`].
///
/// Validates the signature and the embedded expiration claim. This is the
/// cryptographic half of verification; the persisted-row check lives in the
/// token repository.
pub fn validate_token(
    token: &str,
    config: &AuthConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
