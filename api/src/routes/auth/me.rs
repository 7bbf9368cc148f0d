//! Handler for GET /me.

use actix_web::{web, HttpResponse};

use healthid_core::repositories::{OtpRepository, UserRepository};
use healthid_core::services::otp::OtpNotifier;

use crate::app::AppState;
use crate::dto::auth::MeResponse;
use crate::middleware::AuthenticatedUser;

/// Return the identity proven by the bearer token.
///
/// The extractor has already rejected missing (401) and invalid (403)
/// tokens before this body runs.
pub async fn me<U, O, N>(
    _state: web::Data<AppState<U, O, N>>,
    user: AuthenticatedUser,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    N: OtpNotifier + 'static,
{
    HttpResponse::Ok().json(MeResponse {
        user_id: user.user_id,
        email: user.email,
    })
}
