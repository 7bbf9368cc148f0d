//! Database connection pool management.
//!
//! Wraps the SQLx PostgreSQL pool with the application's pool sizing
//! and timeout policy, plus a connectivity probe run at startup.

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    ConnectOptions, PgPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use healthid_shared::config::DatabaseConfig;

use crate::InfraError;

/// PostgreSQL connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new connection pool from configuration.
    ///
    /// Establishes at least one connection up front; a store that is
    /// unreachable within `connect_timeout` fails construction rather
    /// than deferring the error to the first request.
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfraError> {
        tracing::info!(
            max_connections = config.max_connections,
            "creating database connection pool"
        );

        let connect_options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| InfraError::Config(format!("Invalid database URL: {e}")))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

        let connect = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .test_before_acquire(true)
            .connect_with(connect_options);

        let pool = tokio::time::timeout(Duration::from_secs(config.connect_timeout), connect)
            .await
            .map_err(|_| {
                InfraError::Config(format!(
                    "Database connection timed out after {}s",
                    config.connect_timeout
                ))
            })?
            .map_err(|e| {
                tracing::error!("failed to create database pool: {e}");
                InfraError::Database(e)
            })?;

        tracing::info!("database connection pool created");
        Ok(Self { pool })
    }

    /// Get a reference to the underlying SQLx pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Verify connectivity with a trivial query
    pub async fn health_check(&self) -> Result<(), InfraError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("database health check failed: {e}");
                InfraError::Database(e)
            })?;
        Ok(())
    }

    /// Close all connections; called during shutdown
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database connection pool closed");
    }
}
