//! Email delivery for OTP codes.
//!
//! Two implementations of the core notifier seam: an HTTP mail relay
//! for deployments with one configured, and a logging fallback that
//! keeps local development working without any mail infrastructure.

pub mod logging;
pub mod relay;

pub use logging::LoggingMailer;
pub use relay::RelayMailer;

use async_trait::async_trait;

use healthid_core::errors::DomainError;
use healthid_core::services::otp::OtpNotifier;
use healthid_shared::config::EmailConfig;

/// Notifier selected from configuration at startup
pub enum EmailNotifier {
    Relay(RelayMailer),
    Logging(LoggingMailer),
}

impl EmailNotifier {
    /// Pick the relay when one is configured, the logging fallback
    /// otherwise.
    pub fn from_config(config: &EmailConfig) -> Self {
        match &config.relay_url {
            Some(url) => Self::Relay(RelayMailer::new(
                url.clone(),
                config.api_key.clone(),
                config.from_address.clone(),
            )),
            None => {
                tracing::warn!("no mail relay configured, OTP codes will be logged");
                Self::Logging(LoggingMailer::new())
            }
        }
    }
}

#[async_trait]
impl OtpNotifier for EmailNotifier {
    async fn send_otp(
        &self,
        email: &str,
        code: &str,
        expiry_minutes: i64,
    ) -> Result<(), DomainError> {
        match self {
            Self::Relay(mailer) => mailer.send_otp(email, code, expiry_minutes).await,
            Self::Logging(mailer) => mailer.send_otp(email, code, expiry_minutes).await,
        }
    }
}
