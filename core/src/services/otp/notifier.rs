//! Outbound notification contract for OTP delivery.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Fire-and-forget delivery channel for OTP codes.
///
/// Callers treat delivery failure as non-fatal: the OTP entry is
/// already persisted when delivery is attempted, so verification can
/// still succeed if the user obtains the code another way.
#[async_trait]
pub trait OtpNotifier: Send + Sync {
    /// Deliver the code to the address, telling the recipient how many
    /// minutes it stays valid. Implementations must not log the code
    /// together with a plain recipient address.
    async fn send_otp(&self, email: &str, code: &str, expiry_minutes: i64)
        -> Result<(), DomainError>;
}

/// Recording implementation for tests
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Notifier that records sends and can be told to fail
    #[derive(Default)]
    pub struct RecordingNotifier {
        sent: Mutex<Vec<(String, String, i64)>>,
        fail: bool,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        /// A notifier whose every delivery attempt fails
        pub fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        /// Snapshot of `(email, code, expiry_minutes)` triples
        /// delivered so far
        pub fn deliveries(&self) -> Vec<(String, String, i64)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl OtpNotifier for RecordingNotifier {
        async fn send_otp(
            &self,
            email: &str,
            code: &str,
            expiry_minutes: i64,
        ) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::Internal("mail delivery failed".to_string()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((email.to_string(), code.to_string(), expiry_minutes));
            Ok(())
        }
    }
}
