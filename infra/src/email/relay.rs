//! OTP delivery through an HTTP mail relay.

use async_trait::async_trait;
use serde::Serialize;

use healthid_core::errors::DomainError;
use healthid_core::services::otp::OtpNotifier;
use healthid_shared::utils::validation::mask_email;

/// Request body accepted by the mail relay
#[derive(Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: String,
}

/// Mailer that posts messages to an HTTP relay endpoint
pub struct RelayMailer {
    client: reqwest::Client,
    relay_url: String,
    api_key: Option<String>,
    from_address: String,
}

impl RelayMailer {
    pub fn new(relay_url: String, api_key: Option<String>, from_address: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url,
            api_key,
            from_address,
        }
    }
}

#[async_trait]
impl OtpNotifier for RelayMailer {
    async fn send_otp(
        &self,
        email: &str,
        code: &str,
        expiry_minutes: i64,
    ) -> Result<(), DomainError> {
        let message = RelayMessage {
            from: &self.from_address,
            to: email,
            subject: "Your HealthID verification code",
            text: format!(
                "Your verification code is {code}. It expires in {expiry_minutes} minutes."
            ),
        };

        let mut request = self.client.post(&self.relay_url).json(&message);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::Internal(format!("Mail relay request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::Internal(format!(
                "Mail relay returned status {}",
                response.status()
            )));
        }

        tracing::debug!(email = %mask_email(email), "otp email accepted by relay");
        Ok(())
    }
}
