//! End-to-end handler tests over the in-memory repositories.
//!
//! Each test boots the full route table with mock persistence and a
//! recording notifier, then drives it through the HTTP surface.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use healthid_api::{app, AppState};
use healthid_core::repositories::otp_repository::mock::MockOtpRepository;
use healthid_core::repositories::user_repository::mock::MockUserRepository;
use healthid_core::services::auth::{AuthService, AuthServiceConfig};
use healthid_core::services::otp::mock::RecordingNotifier;
use healthid_core::services::otp::{OtpConfig, OtpService};
use healthid_core::services::password::PasswordHasher;
use healthid_core::services::token::{TokenConfig, TokenService};

type TestState = AppState<MockUserRepository, MockOtpRepository, RecordingNotifier>;

fn build_state(echo_otp: bool) -> (web::Data<TestState>, Arc<TokenService>) {
    let otp_repository = Arc::new(MockOtpRepository::new());
    let user_repository =
        Arc::new(MockUserRepository::new().with_otp_repository(Arc::clone(&otp_repository)));
    let notifier = Arc::new(RecordingNotifier::new());

    let otp_service = Arc::new(OtpService::new(
        otp_repository,
        notifier,
        OtpConfig::default(),
    ));
    let token_service = Arc::new(TokenService::new(TokenConfig::with_secret("test-secret")));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        otp_service,
        Arc::clone(&token_service),
        PasswordHasher::new(4),
        AuthServiceConfig::default(),
    ));

    let state = web::Data::new(AppState {
        auth_service,
        token_service: Arc::clone(&token_service),
        echo_otp,
    });
    (state, token_service)
}

macro_rules! init_app {
    ($state:expr, $token_service:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .app_data(web::Data::from(Arc::clone(&$token_service)))
                .configure(app::configure::<
                    MockUserRepository,
                    MockOtpRepository,
                    RecordingNotifier,
                >),
        )
        .await
    };
}

macro_rules! post {
    ($app:expr, $path:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri($path)
            .set_json($body)
            .to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! get {
    ($app:expr, $req:expr) => {
        test::call_service(&$app, $req.to_request()).await
    };
}

fn signup_body(email: &str) -> Value {
    json!({
        "email": email,
        "password": "pw123456",
        "firstName": "A",
        "lastName": "B",
    })
}

async fn body_json(response: ServiceResponse) -> Value {
    test::read_body_json(response).await
}

#[actix_web::test]
async fn signup_returns_201_with_prefixed_health_id() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);

    let response = post!(app, "/signup", signup_body("a@x.com"));
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "User successfully registered.");
    assert_eq!(body["user"]["email"], "a@x.com");
    assert!(body["user"]["healthId"]
        .as_str()
        .unwrap()
        .starts_with("HID-"));
}

#[actix_web::test]
async fn duplicate_signup_returns_409() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);

    let first = post!(app, "/signup", signup_body("a@x.com"));
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post!(app, "/signup", signup_body("a@x.com"));
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = body_json(second).await;
    assert_eq!(body["error"], "Email address is already in use.");
}

#[actix_web::test]
async fn signup_rejects_missing_and_malformed_fields() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);

    let missing = post!(
        app,
        "/signup",
        json!({"email": "a@x.com", "password": "pw123456", "firstName": "", "lastName": "B"})
    );
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let malformed = post!(app, "/signup", signup_body("not-an-email"));
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    let body = body_json(malformed).await;
    assert_eq!(body["error"], "Invalid email format.");
}

#[actix_web::test]
async fn undeserializable_body_stays_in_the_error_envelope() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);

    // `password` absent entirely, so deserialization itself fails
    let response = post!(app, "/login", json!({"email": "a@x.com"}));
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid request body.");
}

#[actix_web::test]
async fn signup_accepts_a_short_password() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);

    let response = post!(
        app,
        "/signup",
        json!({"email": "a@x.com", "password": "abc12", "firstName": "A", "lastName": "B"})
    );
    assert_eq!(response.status(), StatusCode::CREATED);

    let login = post!(
        app,
        "/login",
        json!({"email": "a@x.com", "password": "abc12"})
    );
    assert_eq!(login.status(), StatusCode::OK);
}

#[actix_web::test]
async fn concurrent_signups_for_one_email_produce_one_winner() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);

    let first = test::TestRequest::post()
        .uri("/signup")
        .set_json(signup_body("a@x.com"))
        .to_request();
    let second = test::TestRequest::post()
        .uri("/signup")
        .set_json(signup_body("a@x.com"))
        .to_request();

    let (one, two) = tokio::join!(
        test::call_service(&app, first),
        test::call_service(&app, second)
    );

    let mut statuses = [one.status(), two.status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);
}

#[actix_web::test]
async fn login_returns_decodable_token_pair() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);

    let created = body_json(post!(app, "/signup", signup_body("a@x.com"))).await;
    let user_id = created["user"]["userId"].as_str().unwrap().to_string();

    let response = post!(
        app,
        "/login",
        json!({"email": "a@x.com", "password": "pw123456"})
    );
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["userId"], user_id.as_str());

    let access = token_service
        .verify_access(body["accessToken"].as_str().unwrap())
        .unwrap();
    assert_eq!(access.user_id().unwrap().to_string(), user_id);
    token_service
        .verify_refresh(body["refreshToken"].as_str().unwrap())
        .unwrap();
}

#[actix_web::test]
async fn login_failures_share_a_single_401() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);
    post!(app, "/signup", signup_body("a@x.com"));

    let wrong_password = post!(
        app,
        "/login",
        json!({"email": "a@x.com", "password": "nope1234"})
    );
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(wrong_password).await["error"],
        "Invalid credentials."
    );

    let unknown_account = post!(
        app,
        "/login",
        json!({"email": "ghost@x.com", "password": "pw123456"})
    );
    assert_eq!(unknown_account.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(unknown_account).await["error"],
        "Invalid credentials."
    );
}

#[actix_web::test]
async fn send_otp_requires_an_account() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);

    let response = post!(app, "/send-otp", json!({"email": "ghost@x.com"}));
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn otp_is_echoed_only_outside_production() {
    let (state, token_service) = build_state(false);
    let app = init_app!(state, token_service);
    post!(app, "/signup", signup_body("a@x.com"));

    let response = post!(app, "/send-otp", json!({"email": "a@x.com"}));
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body.get("otp").is_none());
}

#[actix_web::test]
async fn otp_verify_is_single_use() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);
    post!(app, "/signup", signup_body("a@x.com"));

    let issued = body_json(post!(app, "/send-otp", json!({"email": "a@x.com"}))).await;
    let otp = issued["otp"].as_str().unwrap().to_string();
    assert_eq!(otp.len(), 6);

    let wrong = post!(
        app,
        "/verify-otp",
        json!({"email": "a@x.com", "otp": "000000"})
    );
    assert_eq!(wrong.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(wrong).await["error"], "Invalid OTP.");

    // the entry survives a mismatch
    let correct = post!(
        app,
        "/verify-otp",
        json!({"email": "a@x.com", "otp": otp.clone()})
    );
    assert_eq!(correct.status(), StatusCode::OK);

    // but not a successful verification
    let again = post!(app, "/verify-otp", json!({"email": "a@x.com", "otp": otp}));
    assert_eq!(again.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(again).await["error"],
        "No OTP found for this email."
    );
}

#[actix_web::test]
async fn password_reset_enforces_policy_before_any_mutation() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);
    post!(app, "/signup", signup_body("a@x.com"));

    let issued = body_json(post!(app, "/send-otp", json!({"email": "a@x.com"}))).await;
    let otp = issued["otp"].as_str().unwrap().to_string();

    let short = post!(
        app,
        "/confirm-password-reset",
        json!({"email": "a@x.com", "otp": otp.clone(), "newPassword": "short67"})
    );
    assert_eq!(short.status(), StatusCode::BAD_REQUEST);

    // old password still works, OTP not consumed
    let old_login = post!(
        app,
        "/login",
        json!({"email": "a@x.com", "password": "pw123456"})
    );
    assert_eq!(old_login.status(), StatusCode::OK);

    let reset = post!(
        app,
        "/confirm-password-reset",
        json!({"email": "a@x.com", "otp": otp, "newPassword": "new-pass-9"})
    );
    assert_eq!(reset.status(), StatusCode::OK);

    let new_login = post!(
        app,
        "/login",
        json!({"email": "a@x.com", "password": "new-pass-9"})
    );
    assert_eq!(new_login.status(), StatusCode::OK);

    let stale_login = post!(
        app,
        "/login",
        json!({"email": "a@x.com", "password": "pw123456"})
    );
    assert_eq!(stale_login.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn refresh_token_rotates_the_pair() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);
    post!(app, "/signup", signup_body("a@x.com"));

    let login = body_json(post!(
        app,
        "/login",
        json!({"email": "a@x.com", "password": "pw123456"})
    ))
    .await;

    let response = post!(
        app,
        "/refresh-token",
        json!({"refreshToken": login["refreshToken"]})
    );
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["userId"], login["userId"]);
    token_service
        .verify_access(body["accessToken"].as_str().unwrap())
        .unwrap();
}

#[actix_web::test]
async fn refresh_rejects_garbage_and_access_tokens() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);
    post!(app, "/signup", signup_body("a@x.com"));

    let garbage = post!(app, "/refresh-token", json!({"refreshToken": "not-a-jwt"}));
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);

    let login = body_json(post!(
        app,
        "/login",
        json!({"email": "a@x.com", "password": "pw123456"})
    ))
    .await;
    let crossed = post!(
        app,
        "/refresh-token",
        json!({"refreshToken": login["accessToken"]})
    );
    assert_eq!(crossed.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn protected_route_distinguishes_missing_and_invalid_tokens() {
    let (state, token_service) = build_state(true);
    let app = init_app!(state, token_service);
    post!(app, "/signup", signup_body("a@x.com"));

    let missing = get!(app, test::TestRequest::get().uri("/me"));
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let invalid = get!(
        app,
        test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
    );
    assert_eq!(invalid.status(), StatusCode::FORBIDDEN);

    let login = body_json(post!(
        app,
        "/login",
        json!({"email": "a@x.com", "password": "pw123456"})
    ))
    .await;
    let authorized = get!(
        app,
        test::TestRequest::get().uri("/me").insert_header((
            "Authorization",
            format!("Bearer {}", login["accessToken"].as_str().unwrap()),
        ))
    );
    assert_eq!(authorized.status(), StatusCode::OK);

    let body = body_json(authorized).await;
    assert_eq!(body["userId"], login["userId"]);
    assert_eq!(body["email"], "a@x.com");
}
