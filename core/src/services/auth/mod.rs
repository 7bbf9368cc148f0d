//! Credential service orchestrating signup, login, OTP flows,
//! password reset and token refresh

mod config;
mod service;

pub use config::AuthServiceConfig;
pub use service::{AuthService, SignupData};
