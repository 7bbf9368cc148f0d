use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;

use healthid_api::{app, config::AppConfig, middleware, AppState};
use healthid_core::services::auth::{AuthService, AuthServiceConfig};
use healthid_core::services::otp::{OtpConfig, OtpService};
use healthid_core::services::password::PasswordHasher;
use healthid_core::services::token::{TokenConfig, TokenService};
use healthid_infra::database::{DatabasePool, PgOtpRepository, PgUserRepository};
use healthid_infra::email::EmailNotifier;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("starting HealthID API server");

    // Missing JWT_SECRET or DATABASE_URL stops the process here,
    // before anything binds.
    let config = AppConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let pool = DatabasePool::new(config.database.clone())
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string()))?;
    pool.health_check()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string()))?;
    info!("database connection verified");

    let user_repository = Arc::new(PgUserRepository::new(pool.pool().clone()));
    let otp_repository = Arc::new(PgOtpRepository::new(pool.pool().clone()));
    let notifier = Arc::new(EmailNotifier::from_config(&config.email));

    let otp_service = Arc::new(OtpService::new(
        otp_repository,
        notifier,
        OtpConfig {
            expiry_minutes: config.auth.otp_expiry_minutes,
        },
    ));
    let token_service = Arc::new(TokenService::new(TokenConfig::from_auth_config(&config.auth)));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        otp_service,
        Arc::clone(&token_service),
        PasswordHasher::new(config.auth.bcrypt_cost),
        AuthServiceConfig::from_auth_config(&config.auth),
    ));

    let state = web::Data::new(AppState {
        auth_service,
        token_service: Arc::clone(&token_service),
        echo_otp: !config.environment.is_production(),
    });

    let bind_address = config.server.bind_address();
    info!("binding to {bind_address}");

    let server_config = config.server.clone();
    let environment = config.environment;

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors::create_cors(&server_config, environment))
            .app_data(state.clone())
            .app_data(web::Data::from(Arc::clone(&token_service)))
            .configure(app::configure::<PgUserRepository, PgOtpRepository, EmailNotifier>)
    })
    .bind(&bind_address)?
    .run()
    .await
}
