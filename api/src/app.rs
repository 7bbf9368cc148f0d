//! Application state and route registration.

use std::sync::Arc;

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};

use healthid_shared::types::response::ErrorBody;

use healthid_core::repositories::{OtpRepository, UserRepository};
use healthid_core::services::auth::AuthService;
use healthid_core::services::otp::OtpNotifier;
use healthid_core::services::token::TokenService;

use crate::routes;

/// Shared services handed to every request handler.
///
/// Generic over the persistence and delivery seams so the same
/// handlers run against PostgreSQL in production and the in-memory
/// mocks in tests.
pub struct AppState<U, O, N>
where
    U: UserRepository,
    O: OtpRepository,
    N: OtpNotifier,
{
    pub auth_service: Arc<AuthService<U, O, N>>,
    pub token_service: Arc<TokenService>,
    /// Echo issued OTP codes in the response body (never in production)
    pub echo_otp: bool,
}

/// Json extractor configuration keeping malformed bodies inside the
/// `{error}` envelope.
///
/// Without this, a body that fails deserialization (a missing field,
/// broken JSON) would leave as actix-web's plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorBody::new("Invalid request body."));
        InternalError::from_response(err, response).into()
    })
}

/// Register all routes for the given service types.
///
/// The bearer-token extractor resolves [`TokenService`] from app data,
/// so callers must also register the service with
/// `web::Data::from(token_service)`.
pub fn configure<U, O, N>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    N: OtpNotifier + 'static,
{
    cfg.app_data(json_config())
        .route("/health", web::get().to(routes::health::health_check))
        .route("/signup", web::post().to(routes::auth::signup::<U, O, N>))
        .route("/login", web::post().to(routes::auth::login::<U, O, N>))
        .route("/send-otp", web::post().to(routes::auth::send_otp::<U, O, N>))
        .route(
            "/verify-otp",
            web::post().to(routes::auth::verify_otp::<U, O, N>),
        )
        .route(
            "/confirm-password-reset",
            web::post().to(routes::auth::confirm_password_reset::<U, O, N>),
        )
        .route(
            "/refresh-token",
            web::post().to(routes::auth::refresh_token::<U, O, N>),
        )
        .route("/me", web::get().to(routes::auth::me::<U, O, N>));
}
