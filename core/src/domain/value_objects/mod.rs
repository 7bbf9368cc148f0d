//! Value objects returned by services

mod auth_tokens;

pub use auth_tokens::AuthTokens;
