//! Session token issuance/validation and the session cookie.
//!
//! Sessions are stateless: the server holds no session table. Identity
//! travels as an HS256-signed JWT carrying [`Claims`], wrapped in a signed
//! cookie. A new session fully replaces the old one. The base design sets
//! no expiry claim; session lifetime is bound to the cookie's presence.

use axum_extra::extract::cookie::{Cookie, SameSite};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use signet_core::types::DbId;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Identity claims embedded in every session token. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: DbId,
    pub email: String,
}

/// Configuration for session signing and the cookie policy.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Whether the session cookie is marked `Secure` (HTTPS only).
    pub cookie_secure: bool,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var         | Required | Default |
    /// |-----------------|----------|---------|
    /// | `JWT_SECRET`    | **yes**  | --      |
    /// | `COOKIE_SECURE` | no       | `false` |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty. A missing signing key
    /// is a fatal startup condition.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let cookie_secure: bool = std::env::var("COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("COOKIE_SECURE must be true or false");

        Self {
            secret,
            cookie_secure,
        }
    }
}

/// Sign the given claims into a session token.
pub fn issue(
    claims: &Claims,
    config: &SessionConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(), // HS256
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify a session token's signature and decode its claims.
///
/// Any signature mismatch or malformed token yields `None`; this never
/// propagates an error past the caller boundary.
pub fn verify(token: &str, config: &SessionConfig) -> Option<Claims> {
    // Tokens carry no exp claim, so expiry validation must be off.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .ok()
}

/// Build the session cookie wrapping a freshly issued token.
pub fn session_cookie(token: String, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .build()
}

/// Build a cookie that clears the session on the client.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .build();
    cookie.make_removal();
    cookie
}
