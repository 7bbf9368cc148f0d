//! Bearer-token authentication as a request extractor.
//!
//! Protected handlers take an [`AuthenticatedUser`] argument: the
//! identity is an explicit, already-verified value threaded into the
//! handler, never state smuggled onto the request. A missing or
//! non-Bearer header is 401; a token that fails verification is 403.

use std::future::{ready, Ready};

use actix_web::error::InternalError;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, FromRequest, HttpRequest, HttpResponse};
use uuid::Uuid;

use healthid_core::services::token::TokenService;
use healthid_shared::types::response::ErrorBody;

/// Identity proven by a valid access token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

fn unauthorized(message: &str) -> Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::Unauthorized().json(ErrorBody::new(message)),
    )
    .into()
}

fn forbidden(message: &str) -> Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::Forbidden().json(ErrorBody::new(message)),
    )
    .into()
}

fn extract_bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let result = (|| {
            let token = extract_bearer_token(req)
                .ok_or_else(|| unauthorized("Access denied. No token provided."))?;

            let token_service = req.app_data::<web::Data<TokenService>>().ok_or_else(|| {
                log::error!("TokenService not registered in app data");
                Error::from(InternalError::from_response(
                    "token service missing",
                    HttpResponse::InternalServerError().json(ErrorBody::new("Server error.")),
                ))
            })?;

            let claims = token_service
                .verify_access(token)
                .map_err(|_| forbidden("Invalid or expired token."))?;
            let user_id = claims
                .user_id()
                .map_err(|_| forbidden("Invalid or expired token."))?;

            Ok(AuthenticatedUser {
                user_id,
                email: claims.email,
            })
        })();

        ready(result)
    }
}
