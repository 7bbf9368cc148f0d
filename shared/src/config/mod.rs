//! Configuration modules for the HealthID backend.
//!
//! Every config struct is built from environment variables once at
//! startup and passed down explicitly; nothing reads the environment
//! after construction. Secrets that the service cannot run without
//! (the JWT signing secret) fail construction instead of being checked
//! lazily at request time.

mod auth;
mod database;
mod email;
mod environment;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::Environment;
pub use server::ServerConfig;

use thiserror::Error;

/// Errors raised while building configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {name}")]
    MissingVariable { name: String },

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Read an optional environment variable, treating empty strings as absent
pub(crate) fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read a required environment variable
pub(crate) fn env_required(name: &str) -> Result<String, ConfigError> {
    env_opt(name).ok_or_else(|| ConfigError::MissingVariable {
        name: name.to_string(),
    })
}

/// Read an environment variable and parse it, falling back to a default
pub(crate) fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env_opt(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
