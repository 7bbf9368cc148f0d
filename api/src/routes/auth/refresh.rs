//! Handler for POST /refresh-token.

use actix_web::{web, HttpResponse};
use validator::Validate;

use healthid_core::repositories::{OtpRepository, UserRepository};
use healthid_core::services::otp::OtpNotifier;

use crate::app::AppState;
use crate::dto::auth::{RefreshTokenRequest, TokenResponse};
use crate::handlers::{error_response, validation_failure};

/// Exchange a refresh token for a new access/refresh pair.
///
/// The identity is re-resolved from the store, so tokens for a deleted
/// account are rejected even before their own expiry.
pub async fn refresh_token<U, O, N>(
    state: web::Data<AppState<U, O, N>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    N: OtpNotifier + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_failure(&errors);
    }

    match state
        .auth_service
        .refresh_token(&request.refresh_token)
        .await
    {
        Ok(tokens) => HttpResponse::Ok().json(TokenResponse {
            user_id: tokens.user_id,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }),
        Err(error) => error_response(&error),
    }
}
