//! Token service configuration

use healthid_shared::config::AuthConfig;

/// Signing secret and token lifetimes.
///
/// The observed policy is 7-day access tokens and 30-day refresh
/// tokens; both are configurable.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HS256 signing secret
    pub secret: String,

    /// Access token lifetime in days
    pub access_ttl_days: i64,

    /// Refresh token lifetime in days
    pub refresh_ttl_days: i64,
}

impl TokenConfig {
    /// Build from the application-level auth configuration
    pub fn from_auth_config(config: &AuthConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            access_ttl_days: config.access_token_days,
            refresh_ttl_days: config.refresh_token_days,
        }
    }

    /// Config with the given secret and the observed default lifetimes
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_ttl_days: 7,
            refresh_ttl_days: 30,
        }
    }
}
