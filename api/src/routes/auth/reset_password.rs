//! Handler for POST /confirm-password-reset.

use actix_web::{web, HttpResponse};
use validator::Validate;

use healthid_core::repositories::{OtpRepository, UserRepository};
use healthid_core::services::otp::OtpNotifier;
use healthid_shared::types::response::MessageBody;

use crate::app::AppState;
use crate::dto::auth::ResetPasswordRequest;
use crate::handlers::{error_response, validation_failure};

/// Replace the password after re-verifying the OTP.
///
/// The password policy is enforced before any store access; the hash
/// update and OTP consumption commit atomically.
pub async fn confirm_password_reset<U, O, N>(
    state: web::Data<AppState<U, O, N>>,
    request: web::Json<ResetPasswordRequest>,
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
        .reset_password(&request.email, &request.otp, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageBody::new("Password reset successfully.")),
        Err(error) => error_response(&error),
    }
}
