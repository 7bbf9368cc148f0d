//! Handler for POST /signup.

use actix_web::{web, HttpResponse};
use validator::Validate;

use healthid_core::repositories::{OtpRepository, UserRepository};
use healthid_core::services::auth::SignupData;
use healthid_core::services::otp::OtpNotifier;

use crate::app::AppState;
use crate::dto::auth::{SignupRequest, SignupResponse, UserSummary};
use crate::handlers::{error_response, validation_failure};

/// Create an account with its profile and health identifier.
///
/// # Response
/// * `201` - `{message, user: {userId, email, healthId}}`
/// * `400` - missing or malformed fields
/// * `409` - email already in use
pub async fn signup<U, O, N>(
    state: web::Data<AppState<U, O, N>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    N: OtpNotifier + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_failure(&errors);
    }

    let request = request.into_inner();
    let data = SignupData {
        email: request.email,
        password: request.password,
        first_name: request.first_name,
        last_name: request.last_name,
        phone_number: request.phone_number,
        gender: request.gender,
    };

    match state.auth_service.signup(data).await {
        Ok(user) => HttpResponse::Created().json(SignupResponse {
            message: "User successfully registered.".to_string(),
            user: UserSummary {
                user_id: user.id,
                email: user.email,
                health_id: user.health_id,
            },
        }),
        Err(error) => error_response(&error),
    }
}
