//! Outbound mail configuration

use serde::{Deserialize, Serialize};

use super::env_opt;

/// Configuration for the HTTP mail relay used to deliver OTP codes.
///
/// All fields are optional: when `relay_url` is absent the service
/// falls back to a logging notifier, which keeps local development
/// working without mail credentials.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Mail relay endpoint accepting JSON message payloads
    pub relay_url: Option<String>,

    /// API key for the relay, sent as a bearer token
    pub api_key: Option<String>,

    /// Sender address stamped on outgoing mail
    pub from_address: String,
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            relay_url: env_opt("MAIL_RELAY_URL"),
            api_key: env_opt("MAIL_RELAY_API_KEY"),
            from_address: env_opt("MAIL_FROM_ADDRESS")
                .unwrap_or_else(|| "no-reply@healthid.local".to_string()),
        }
    }

    /// Whether a real relay is configured
    pub fn has_relay(&self) -> bool {
        self.relay_url.is_some()
    }
}
