//! Domain error to HTTP response mapping.
//!
//! Every error leaves the boundary as `{error: <string>}`. Store and
//! internal failures collapse to a generic 500 with the detail logged,
//! never echoed to the client.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use healthid_core::errors::{AuthError, DomainError, TokenError};
use healthid_shared::types::response::ErrorBody;

/// Map a domain error to its HTTP response
pub fn error_response(error: &DomainError) -> HttpResponse {
    let body = ErrorBody::new(error.to_string());

    match error {
        DomainError::Validation(_) => HttpResponse::BadRequest().json(body),

        DomainError::Auth(auth) => match auth {
            AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(body),
            AuthError::EmailAlreadyRegistered => HttpResponse::Conflict().json(body),
            AuthError::AccountNotFound => HttpResponse::NotFound().json(body),
            AuthError::OtpNotFound | AuthError::OtpExpired | AuthError::OtpMismatch => {
                HttpResponse::BadRequest().json(body)
            }
        },

        DomainError::Token(token) => match token {
            TokenError::TokenGenerationFailed => {
                log::error!("token generation failed");
                HttpResponse::InternalServerError().json(ErrorBody::new("Server error."))
            }
            _ => HttpResponse::Unauthorized()
                .json(ErrorBody::new("Invalid or expired refresh token")),
        },

        DomainError::Database(detail) | DomainError::Internal(detail) => {
            log::error!("request failed: {detail}");
            HttpResponse::InternalServerError().json(ErrorBody::new("Server error."))
        }
    }
}

/// Map validator output to a 400 carrying the first field message
pub fn validation_failure(errors: &ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request data.".to_string());

    HttpResponse::BadRequest().json(ErrorBody::new(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use healthid_core::errors::ValidationError;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        let cases = [
            (
                DomainError::Validation(ValidationError::InvalidEmail),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Auth(AuthError::InvalidCredentials),
                StatusCode::UNAUTHORIZED,
            ),
            (
                DomainError::Auth(AuthError::EmailAlreadyRegistered),
                StatusCode::CONFLICT,
            ),
            (
                DomainError::Auth(AuthError::AccountNotFound),
                StatusCode::NOT_FOUND,
            ),
            (
                DomainError::Auth(AuthError::OtpMismatch),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Token(TokenError::TokenExpired),
                StatusCode::UNAUTHORIZED,
            ),
            (
                DomainError::Database("connection refused".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error_response(&error).status(), expected, "{error:?}");
        }
    }
}
