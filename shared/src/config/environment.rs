//! Runtime environment detection

use serde::{Deserialize, Serialize};

/// Runtime environment the service is deployed in.
///
/// Controls development conveniences such as echoing OTP codes in the
/// send-otp response body. Anything that is not explicitly production
/// is treated as development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Read from `APP_ENV`, defaulting to development
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}
