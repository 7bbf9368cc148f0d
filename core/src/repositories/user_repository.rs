//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::{NewAccount, User};
use crate::errors::DomainError;

/// Repository contract for accounts, profiles and health identifiers.
///
/// Implementations own the store's invariants: email uniqueness is
/// enforced by the store (a race between two signups is arbitrated by
/// the unique index, not by application logic), and the multi-row
/// mutations (`register`, `reset_password`) are atomic — either every
/// row lands or none does.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an account by email address (exact, case-sensitive match)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find an account by its internal id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a new account with its profile and health identifier in
    /// one atomic unit.
    ///
    /// # Returns
    /// * `Ok(User)` - the created account
    /// * `Err(DomainError::Auth(EmailAlreadyRegistered))` - the email
    ///   is taken (store uniqueness violation)
    /// * `Err(DomainError)` - other store failure; nothing persisted
    async fn register(&self, account: NewAccount) -> Result<User, DomainError>;

    /// Replace the stored password hash for the account with the given
    /// email and consume any outstanding OTP rows for that email, in
    /// the same atomic unit.
    ///
    /// # Returns
    /// * `Ok(true)` - password updated
    /// * `Ok(false)` - no account with that email
    async fn reset_password(&self, email: &str, password_hash: &str)
        -> Result<bool, DomainError>;
}

/// In-memory implementation for tests
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use crate::errors::AuthError;
    use crate::repositories::otp_repository::mock::MockOtpRepository;
    use crate::repositories::OtpRepository as _;

    /// Mock user repository backed by a map, mirroring the store's
    /// uniqueness and atomicity semantics. When handed an OTP mock it
    /// also honors the `reset_password` contract of consuming the
    /// email's OTP rows.
    #[derive(Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<HashMap<Uuid, User>>>,
        otp_repository: Option<Arc<MockOtpRepository>>,
    }

    impl MockUserRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Couple the mock to an OTP mock so `reset_password` consumes
        /// entries the way the real store does in its transaction.
        pub fn with_otp_repository(mut self, otp_repository: Arc<MockOtpRepository>) -> Self {
            self.otp_repository = Some(otp_repository);
            self
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
            let users = self.users.read().await;
            Ok(users.values().find(|u| u.email == email).cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
            let users = self.users.read().await;
            Ok(users.get(&id).cloned())
        }

        async fn register(&self, account: NewAccount) -> Result<User, DomainError> {
            let mut users = self.users.write().await;

            if users.values().any(|u| u.email == account.email) {
                return Err(AuthError::EmailAlreadyRegistered.into());
            }

            let user = User {
                id: account.id,
                email: account.email,
                password_hash: account.password_hash,
                phone_number: account.phone_number,
                health_id: account.health_id,
                created_at: chrono::Utc::now(),
            };
            users.insert(user.id, user.clone());
            Ok(user)
        }

        async fn reset_password(
            &self,
            email: &str,
            password_hash: &str,
        ) -> Result<bool, DomainError> {
            let mut users = self.users.write().await;
            match users.values_mut().find(|u| u.email == email) {
                Some(user) => {
                    user.password_hash = password_hash.to_string();
                    drop(users);
                    if let Some(otp_repository) = &self.otp_repository {
                        otp_repository.delete_by_email(email).await?;
                    }
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }
}
