//! PostgreSQL persistence via SQLx

pub mod connection;
pub mod postgres;

pub use connection::DatabasePool;
pub use postgres::{PgOtpRepository, PgUserRepository};
