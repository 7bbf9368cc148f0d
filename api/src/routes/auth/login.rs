//! Handler for POST /login.

use actix_web::{web, HttpResponse};
use validator::Validate;

use healthid_core::repositories::{OtpRepository, UserRepository};
use healthid_core::services::otp::OtpNotifier;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::{error_response, validation_failure};

/// Authenticate with email and password.
///
/// An unknown email and a wrong password both produce the same 401, so
/// the response cannot be used to probe which emails are registered.
pub async fn login<U, O, N>(
    state: web::Data<AppState<U, O, N>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
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
