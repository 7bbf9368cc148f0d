//! Infrastructure layer for the HealthID backend.
//!
//! Concrete implementations behind the core layer's seams:
//! - **database**: PostgreSQL persistence via SQLx (accounts, profiles,
//!   health identifiers, OTP entries)
//! - **email**: OTP delivery over an HTTP mail relay, with a logging
//!   fallback for environments without one

pub mod database;
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
