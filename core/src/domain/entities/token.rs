//! Token claims for JWT-based authentication.
//!
//! Claims are ephemeral: they live only inside signed token strings
//! and are never persisted. Access and refresh claims share one shape
//! and differ in lifetime and the `token_use` marker.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT issuer
pub const JWT_ISSUER: &str = "healthid";

/// Marker distinguishing access from refresh tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenUse {
    Access,
    Refresh,
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account id)
    pub sub: String,

    /// Email the token was issued for
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Whether this is an access or a refresh token
    pub token_use: TokenUse,
}

impl Claims {
    /// Create claims for the given identity with an expiry `ttl_days`
    /// from now.
    pub fn new(user_id: Uuid, email: String, token_use: TokenUse, ttl_days: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(ttl_days);
        Self {
            sub: user_id.to_string(),
            email,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            token_use,
        }
    }

    /// Parse the subject back into an account id
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// A freshly issued access/refresh token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
