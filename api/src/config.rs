//! Application configuration assembled from the environment.

use healthid_shared::config::{
    AuthConfig, ConfigError, DatabaseConfig, EmailConfig, Environment, ServerConfig,
};

/// Everything the server needs to start.
///
/// Construction fails if a required variable (notably `JWT_SECRET` and
/// `DATABASE_URL`) is absent, so a misconfigured process never reaches
/// the bind step.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub email: EmailConfig,
    pub environment: Environment,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            email: EmailConfig::from_env(),
            environment: Environment::from_env(),
        })
    }
}
