//! Credential service configuration

use healthid_shared::config::AuthConfig;

/// Policy applied by the credential service before any store access
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Minimum accepted length for a reset password
    pub min_password_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            min_password_length: 8,
        }
    }
}

impl AuthServiceConfig {
    /// Build from the application-level auth configuration
    pub fn from_auth_config(config: &AuthConfig) -> Self {
        Self {
            min_password_length: config.min_password_length,
        }
    }
}
