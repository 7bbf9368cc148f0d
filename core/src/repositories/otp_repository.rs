//! OTP repository trait defining the interface for OTP persistence.

use async_trait::async_trait;

use crate::domain::entities::otp::OtpEntry;
use crate::errors::DomainError;

/// Repository contract for one-time-password entries.
///
/// The store keeps at most one live entry per email: `replace` deletes
/// any prior entry before inserting the new one. Lookups only ever
/// consider the newest entry for an email.
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Delete any existing entry for the email and insert the given
    /// one, atomically.
    async fn replace(&self, entry: OtpEntry) -> Result<(), DomainError>;

    /// Fetch the newest entry for an email, if any
    async fn find_latest(&self, email: &str) -> Result<Option<OtpEntry>, DomainError>;

    /// Delete all entries for an email; returns the number removed
    async fn delete_by_email(&self, email: &str) -> Result<u64, DomainError>;
}

/// In-memory implementation for tests
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock OTP repository holding one entry per email, which is
    /// exactly the live-entry invariant the real store maintains.
    #[derive(Default)]
    pub struct MockOtpRepository {
        entries: Arc<RwLock<HashMap<String, OtpEntry>>>,
    }

    impl MockOtpRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl OtpRepository for MockOtpRepository {
        async fn replace(&self, entry: OtpEntry) -> Result<(), DomainError> {
            let mut entries = self.entries.write().await;
            entries.insert(entry.email.clone(), entry);
            Ok(())
        }

        async fn find_latest(&self, email: &str) -> Result<Option<OtpEntry>, DomainError> {
            let entries = self.entries.read().await;
            Ok(entries.get(email).cloned())
        }

        async fn delete_by_email(&self, email: &str) -> Result<u64, DomainError> {
            let mut entries = self.entries.write().await;
            Ok(entries.remove(email).map(|_| 1).unwrap_or(0))
        }
    }
}
