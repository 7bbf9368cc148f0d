//! PostgreSQL implementations of the core repository traits

pub mod otp_repository_impl;
pub mod user_repository_impl;

pub use otp_repository_impl::PgOtpRepository;
pub use user_repository_impl::PgUserRepository;
