//! Repository traits abstracting the credential store.
//!
//! Implementations live in the infrastructure layer; in-memory mocks
//! for tests sit next to each trait.

pub mod otp_repository;
pub mod user_repository;

pub use otp_repository::OtpRepository;
pub use user_repository::UserRepository;
