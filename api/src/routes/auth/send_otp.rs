//! Handler for POST /send-otp.

use actix_web::{web, HttpResponse};
use validator::Validate;

use healthid_core::repositories::{OtpRepository, UserRepository};
use healthid_core::services::otp::OtpNotifier;

use crate::app::AppState;
use crate::dto::auth::{SendOtpRequest, SendOtpResponse};
use crate::handlers::{error_response, validation_failure};

/// Issue an OTP for an existing account.
///
/// Delivery failure does not fail the request; the code is persisted
/// either way. Outside production the code is echoed in the response
/// so flows can be exercised without a mail relay.
pub async fn send_otp<U, O, N>(
    state: web::Data<AppState<U, O, N>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    N: OtpNotifier + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_failure(&errors);
    }

    match state.auth_service.request_otp(&request.email).await {
        Ok(issued) => HttpResponse::Ok().json(SendOtpResponse {
            message: "OTP sent to email.".to_string(),
            otp: state.echo_otp.then_some(issued.code),
        }),
        Err(error) => error_response(&error),
    }
}
