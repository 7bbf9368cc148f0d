//! JWT issuing and validation

mod config;
mod service;

pub use config::TokenConfig;
pub use service::TokenService;
