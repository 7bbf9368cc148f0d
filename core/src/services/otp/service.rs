//! OTP issue/verify service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use healthid_shared::utils::validation::mask_email;

use crate::domain::entities::otp::{OtpEntry, DEFAULT_EXPIRY_MINUTES};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::OtpRepository;

use super::notifier::OtpNotifier;

/// Policy knobs for OTP issuing
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Validity window in minutes
    pub expiry_minutes: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: DEFAULT_EXPIRY_MINUTES,
        }
    }
}

/// Outcome of issuing an OTP. The code is returned so the caller can
/// echo it in non-production responses.
#[derive(Debug, Clone)]
pub struct IssuedOtp {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues short-lived numeric codes and validates them against the
/// single-use / single-live-entry policy.
pub struct OtpService<R, N>
where
    R: OtpRepository,
    N: OtpNotifier,
{
    repository: Arc<R>,
    notifier: Arc<N>,
    config: OtpConfig,
}

impl<R, N> OtpService<R, N>
where
    R: OtpRepository,
    N: OtpNotifier,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>, config: OtpConfig) -> Self {
        Self {
            repository,
            notifier,
            config,
        }
    }

    /// Issue a fresh code for the email.
    ///
    /// Any previously issued code for the email is invalidated first
    /// (single-live-entry invariant). The entry is persisted before
    /// delivery is attempted; a delivery failure is logged and
    /// swallowed so the enclosing request still succeeds.
    pub async fn issue(&self, email: &str) -> DomainResult<IssuedOtp> {
        let entry = OtpEntry::new(email.to_string(), self.config.expiry_minutes);
        let issued = IssuedOtp {
            code: entry.code.clone(),
            expires_at: entry.expires_at,
        };

        self.repository.replace(entry).await?;

        if let Err(err) = self
            .notifier
            .send_otp(email, &issued.code, self.config.expiry_minutes)
            .await
        {
            warn!(
                email = %mask_email(email),
                error = %err,
                "OTP delivery failed; entry kept for verification"
            );
        }

        Ok(issued)
    }

    /// Validate a candidate code without consuming the entry.
    ///
    /// Only the newest entry for the email is ever considered. An
    /// expired entry is rejected but left in place; the next `issue`
    /// call replaces it.
    pub async fn check(&self, email: &str, code: &str) -> DomainResult<()> {
        let entry = self
            .repository
            .find_latest(email)
            .await?
            .ok_or(AuthError::OtpNotFound)?;

        if entry.is_expired() {
            return Err(AuthError::OtpExpired.into());
        }
        if !entry.matches(code) {
            return Err(AuthError::OtpMismatch.into());
        }
        Ok(())
    }

    /// Validate a candidate code and consume the entry on success
    /// (single-use: a second verification fails with "no OTP found").
    pub async fn verify(&self, email: &str, code: &str) -> DomainResult<()> {
        self.check(email, code).await?;
        self.repository.delete_by_email(email).await?;
        Ok(())
    }
}
