//! Authentication and credential policy configuration

use serde::{Deserialize, Serialize};

use super::{env_parse, env_required, ConfigError};

/// Configuration for the credential lifecycle: JWT signing, token
/// lifetimes, OTP validity and password policy.
///
/// The signing secret has no default; a deployment without
/// `JWT_SECRET` must fail at startup, not at the first login.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign and verify JWTs (HS256)
    pub jwt_secret: String,

    /// Access token lifetime in days
    pub access_token_days: i64,

    /// Refresh token lifetime in days
    pub refresh_token_days: i64,

    /// OTP validity window in minutes
    pub otp_expiry_minutes: i64,

    /// Minimum accepted password length
    pub min_password_length: usize,

    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Create from environment variables.
    ///
    /// Fails when `JWT_SECRET` is absent or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt_secret: env_required("JWT_SECRET")?,
            access_token_days: env_parse("ACCESS_TOKEN_DAYS", 7),
            refresh_token_days: env_parse("REFRESH_TOKEN_DAYS", 30),
            otp_expiry_minutes: env_parse("OTP_EXPIRY_MINUTES", 10),
            min_password_length: env_parse("MIN_PASSWORD_LENGTH", 8),
            bcrypt_cost: env_parse("BCRYPT_COST", 10),
        })
    }

    /// Construct a config with the given secret and default policy,
    /// mainly for tests and local tooling.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            access_token_days: 7,
            refresh_token_days: 30,
            otp_expiry_minutes: 10,
            min_password_length: 8,
            bcrypt_cost: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_secret_uses_observed_policy_defaults() {
        let config = AuthConfig::with_secret("test-secret");
        assert_eq!(config.access_token_days, 7);
        assert_eq!(config.refresh_token_days, 30);
        assert_eq!(config.otp_expiry_minutes, 10);
        assert_eq!(config.min_password_length, 8);
        assert_eq!(config.bcrypt_cost, 10);
    }
}
