//! Credential service implementation.
//!
//! Composes the credential store, password hasher, OTP service and
//! token issuer into the six operations of the credential lifecycle.
//! Data flows one direction: request data comes in, primitives are
//! called, a result goes out; no primitive calls back into this
//! service.

use std::sync::Arc;

use tracing::{debug, info};

use healthid_shared::utils::validation::{is_valid_email, mask_email, meets_password_policy};

use crate::domain::entities::user::{NewAccount, Profile, User};
use crate::domain::value_objects::AuthTokens;
use crate::errors::{AuthError, DomainResult, TokenError, ValidationError};
use crate::repositories::{OtpRepository, UserRepository};
use crate::services::otp::{IssuedOtp, OtpNotifier, OtpService};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Validated signup input, produced by the API boundary before it
/// reaches this service.
#[derive(Debug, Clone)]
pub struct SignupData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
}

/// Credential service for the complete authentication lifecycle
pub struct AuthService<U, O, N>
where
    U: UserRepository,
    O: OtpRepository,
    N: OtpNotifier,
{
    user_repository: Arc<U>,
    otp_service: Arc<OtpService<O, N>>,
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
    config: AuthServiceConfig,
}

impl<U, O, N> AuthService<U, O, N>
where
    U: UserRepository,
    O: OtpRepository,
    N: OtpNotifier,
{
    pub fn new(
        user_repository: Arc<U>,
        otp_service: Arc<OtpService<O, N>>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            otp_service,
            token_service,
            password_hasher,
            config,
        }
    }

    /// Register a new account.
    ///
    /// Creates the account, its profile and its health identifier in
    /// one atomic unit; a concurrent signup for the same email loses
    /// at the store's uniqueness constraint and surfaces as
    /// [`AuthError::EmailAlreadyRegistered`].
    ///
    /// The minimum-length policy applies only to password resets;
    /// signup requires the password to be present, nothing more.
    pub async fn signup(&self, data: SignupData) -> DomainResult<User> {
        if !is_valid_email(&data.email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        let password_hash = self.password_hasher.hash(&data.password)?;
        let account = NewAccount::new(
            data.email,
            password_hash,
            data.phone_number,
            Profile {
                first_name: data.first_name,
                last_name: data.last_name,
                gender: data.gender,
            },
        );

        let user = self.user_repository.register(account).await?;
        info!(email = %mask_email(&user.email), user_id = %user.id, "account registered");
        Ok(user)
    }

    /// Authenticate with email and password.
    ///
    /// An absent account and a password mismatch produce the same
    /// error so the response cannot be used to enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthTokens> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = self.token_service.issue_pair(user.id, &user.email)?;
        debug!(user_id = %user.id, "login succeeded");
        Ok(AuthTokens::from_pair(user.id, pair))
    }

    /// Issue an OTP for an existing account's email.
    ///
    /// Delivery is fire-and-forget; a notifier failure does not fail
    /// this operation.
    pub async fn request_otp(&self, email: &str) -> DomainResult<IssuedOtp> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        self.user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        self.otp_service.issue(email).await
    }

    /// Verify an OTP, consuming it on success
    pub async fn verify_otp(&self, email: &str, code: &str) -> DomainResult<()> {
        self.otp_service.verify(email, code).await
    }

    /// Reset the password after re-verifying the OTP.
    ///
    /// The password policy is checked before anything touches the
    /// store; the hash update and OTP consumption then commit as one
    /// atomic unit in the repository.
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if !meets_password_policy(new_password, self.config.min_password_length) {
            return Err(ValidationError::PasswordTooShort {
                min: self.config.min_password_length,
            }
            .into());
        }

        self.otp_service.check(email, code).await?;

        let password_hash = self.password_hasher.hash(new_password)?;
        let updated = self
            .user_repository
            .reset_password(email, &password_hash)
            .await?;
        if !updated {
            return Err(AuthError::AccountNotFound.into());
        }

        info!(email = %mask_email(email), "password reset");
        Ok(())
    }

    /// Exchange a refresh token for a new access/refresh pair.
    ///
    /// The identity is re-resolved from the store so a deleted or
    /// altered account invalidates its refresh tokens. Previously
    /// issued refresh tokens are not revoked; each remains valid until
    /// its own expiry.
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<AuthTokens> {
        let claims = self.token_service.verify_refresh(refresh_token)?;
        let user_id = claims
            .user_id()
            .map_err(|_| TokenError::InvalidClaims)?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        let pair = self.token_service.issue_pair(user.id, &user.email)?;
        Ok(AuthTokens::from_pair(user.id, pair))
    }
}
