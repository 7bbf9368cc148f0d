//! Cross-cutting request plumbing

pub mod auth;
pub mod cors;

pub use auth::AuthenticatedUser;
