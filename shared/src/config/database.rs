//! Database configuration module

use serde::{Deserialize, Serialize};

use super::{env_parse, env_required, ConfigError};

/// Database configuration for the PostgreSQL connection pool
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// How long a request may wait for a pooled connection, in seconds.
    /// The pool queues callers up to this bound instead of waiting forever.
    pub acquire_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,
}

impl DatabaseConfig {
    /// Create from environment variables
    ///
    /// `DATABASE_URL` is required; pool tuning knobs fall back to
    /// defaults suitable for a small deployment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("DATABASE_URL")?,
            max_connections: env_parse("DATABASE_MAX_CONNECTIONS", 10),
            connect_timeout: env_parse("DATABASE_CONNECT_TIMEOUT", 30),
            acquire_timeout: env_parse("DATABASE_ACQUIRE_TIMEOUT", 10),
            idle_timeout: env_parse("DATABASE_IDLE_TIMEOUT", 600),
        })
    }

    /// Create a new database configuration with URL and defaults
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            connect_timeout: 30,
            acquire_timeout: 10,
            idle_timeout: 600,
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_pool_defaults() {
        let config = DatabaseConfig::new("postgres://localhost/healthid");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout, 10);
    }

    #[test]
    fn with_max_connections_overrides_default() {
        let config = DatabaseConfig::new("postgres://localhost/healthid")
            .with_max_connections(4);
        assert_eq!(config.max_connections, 4);
    }
}
