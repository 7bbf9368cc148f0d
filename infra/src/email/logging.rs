//! Logging mailer for environments without a relay.

use async_trait::async_trait;

use healthid_core::errors::DomainError;
use healthid_core::services::otp::OtpNotifier;
use healthid_shared::utils::validation::mask_email;

/// Mailer that writes the code to the log instead of sending mail.
///
/// The recipient address is masked, so log output never pairs a code
/// with a plain address.
#[derive(Default)]
pub struct LoggingMailer;

impl LoggingMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OtpNotifier for LoggingMailer {
    async fn send_otp(
        &self,
        email: &str,
        code: &str,
        expiry_minutes: i64,
    ) -> Result<(), DomainError> {
        tracing::info!(
            email = %mask_email(email),
            code = %code,
            expires_in_minutes = expiry_minutes,
            "otp issued (logging mailer)"
        );
        Ok(())
    }
}
