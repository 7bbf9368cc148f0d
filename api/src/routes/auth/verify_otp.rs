//! Handler for POST /verify-otp.

use actix_web::{web, HttpResponse};
use validator::Validate;

use healthid_core::repositories::{OtpRepository, UserRepository};
use healthid_core::services::otp::OtpNotifier;
use healthid_shared::types::response::MessageBody;

use crate::app::AppState;
use crate::dto::auth::VerifyOtpRequest;
use crate::handlers::{error_response, validation_failure};

/// Verify an OTP, consuming it on success.
///
/// A verified code cannot be used again; the next attempt fails with
/// "no OTP found".
pub async fn verify_otp<U, O, N>(
    state: web::Data<AppState<U, O, N>>,
    request: web::Json<VerifyOtpRequest>,
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
        .verify_otp(&request.email, &request.otp)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageBody::new("OTP verified successfully.")),
        Err(error) => error_response(&error),
    }
}
