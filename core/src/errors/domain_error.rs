//! Domain-specific error types for the credential lifecycle.
//!
//! The taxonomy mirrors the HTTP mapping the API layer applies:
//! validation failures become 400s, credential failures 401, unknown
//! accounts 404, duplicate identities 409, and store failures a
//! generic 500 whose detail is logged but never surfaced.

use thiserror::Error;

/// Result alias used throughout the core services
pub type DomainResult<T> = Result<T, DomainError>;

/// Authentication and OTP failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Account absent or password mismatch; one variant for both so
    /// the response cannot be used for account enumeration.
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Email address is already in use.")]
    EmailAlreadyRegistered,

    #[error("No account found with this email address.")]
    AccountNotFound,

    #[error("No OTP found for this email.")]
    OtpNotFound,

    #[error("OTP has expired. Please request a new one.")]
    OtpExpired,

    #[error("Invalid OTP.")]
    OtpMismatch,
}

/// Token validation and issuing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation failures, detected before any persistence side
/// effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("New password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },
}

/// Top-level error type crossing the service boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store failure; the message is internal detail and must not be
    /// sent to clients.
    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Stable machine-readable code, used in logs
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Auth(AuthError::InvalidCredentials) => "INVALID_CREDENTIALS",
            DomainError::Auth(AuthError::EmailAlreadyRegistered) => "EMAIL_ALREADY_REGISTERED",
            DomainError::Auth(AuthError::AccountNotFound) => "ACCOUNT_NOT_FOUND",
            DomainError::Auth(AuthError::OtpNotFound) => "OTP_NOT_FOUND",
            DomainError::Auth(AuthError::OtpExpired) => "OTP_EXPIRED",
            DomainError::Auth(AuthError::OtpMismatch) => "OTP_MISMATCH",
            DomainError::Token(TokenError::TokenExpired) => "TOKEN_EXPIRED",
            DomainError::Token(TokenError::InvalidSignature) => "INVALID_SIGNATURE",
            DomainError::Token(TokenError::InvalidTokenFormat) => "INVALID_TOKEN_FORMAT",
            DomainError::Token(TokenError::InvalidClaims) => "INVALID_CLAIMS",
            DomainError::Token(TokenError::InvalidRefreshToken) => "INVALID_REFRESH_TOKEN",
            DomainError::Token(TokenError::TokenGenerationFailed) => "TOKEN_GENERATION_FAILED",
            DomainError::Validation(_) => "VALIDATION_ERROR",
            DomainError::Database(_) => "DATABASE_ERROR",
            DomainError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
