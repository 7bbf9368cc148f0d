//! CORS configuration for browser clients.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use healthid_shared::config::{Environment, ServerConfig};

/// Build the CORS layer for the current environment.
///
/// Production restricts origins to the configured frontend; elsewhere
/// any origin is accepted for local development.
pub fn create_cors(server: &ServerConfig, environment: Environment) -> Cors {
    let cors = if environment.is_production() {
        Cors::default().allowed_origin(&server.allowed_origin)
    } else {
        log::info!("permissive CORS enabled outside production");
        Cors::default().allow_any_origin()
    };

    cors.allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
