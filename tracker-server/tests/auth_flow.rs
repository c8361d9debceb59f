//! Authentication and account management flows

mod common;

use common::*;
use http::StatusCode;
use serde_json::json;

use shared::models::User;
use tracker_server::auth::{JwtConfig, JwtService};

#[tokio::test]
async fn test_liveness_endpoints_are_public() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (app, _state) = test_app(&dir).await;

    let (status, body) = request(&app, "GET", "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Employee Performance Tracker API is running"
    );

    let (status, body) = request(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_login_and_me() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (app, _state) = test_app(&dir).await;

    let (status, body) = request(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["email"], ADMIN_EMAIL);
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["user"].get("password_hash").is_none());

    let token = body["access_token"].as_str().expect("token");
    let (status, body) = request(&app, "GET", "/auth/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], ADMIN_EMAIL);

    // No Authorization header at all
    let (status, _) = request(&app, "GET", "/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (app, _state) = test_app(&dir).await;

    let (unknown_status, unknown_body) = request(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({"email": "ghost@example.com", "password": "whatever"})),
    )
    .await;
    let (wrong_status, wrong_body) = request(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({"email": ADMIN_EMAIL, "password": "not-the-password"})),
    )
    .await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    // Same code and message for both failure modes
    assert_eq!(unknown_body["code"], wrong_body["code"]);
    assert_eq!(unknown_body["message"], wrong_body["message"]);
}

#[tokio::test]
async fn test_inactive_accounts_are_locked_out() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (app, state) = test_app(&dir).await;
    let admin = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    // Created inactive: login refused with 403, not 401
    let (status, _) = request(
        &app,
        "POST",
        "/users",
        Some(&admin),
        Some(json!({
            "name": "Dormant",
            "email": "dormant@example.com",
            "password": "pw-dormant-1",
            "is_active": false,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = request(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({"email": "dormant@example.com", "password": "pw-dormant-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // An already-issued token stops working once the account is disabled
    create_user(&app, &admin, "active@example.com", "pw-active-1", "employee", None).await;
    let token = login(&app, "active@example.com", "pw-active-1").await;

    sqlx::query("UPDATE user_account SET is_active = 0 WHERE email = ?")
        .bind("active@example.com")
        .execute(&state.pool)
        .await
        .expect("deactivate");

    let (status, _) = request(&app, "GET", "/goals", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_bad_tokens_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (app, _state) = test_app(&dir).await;

    // Garbage
    let (status, _) = request(&app, "GET", "/employees", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Signed with a different secret
    let foreign = JwtService::with_config(JwtConfig {
        secret: "a-completely-different-signing-secret!!".to_string(),
        expiration_minutes: 60,
    });
    let token = foreign.generate_token(&seeded_admin()).expect("token");
    let (status, _) = request(&app, "GET", "/employees", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Correctly signed but already expired
    let expired = JwtService::with_config(JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiration_minutes: -1,
    });
    let token = expired.generate_token(&seeded_admin()).expect("token");
    let (status, _) = request(&app, "GET", "/employees", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A valid token for an account that no longer exists
    let valid = JwtService::with_config(JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiration_minutes: 60,
    });
    let mut ghost = seeded_admin();
    ghost.id = 404;
    let token = valid.generate_token(&ghost).expect("token");
    let (status, _) = request(&app, "GET", "/employees", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_management_is_admin_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (app, _state) = test_app(&dir).await;
    let admin = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    create_user(&app, &admin, "mgr@example.com", "pw-manager-1", "manager", None).await;
    create_user(&app, &admin, "emp@example.com", "pw-worker-1", "employee", None).await;

    let manager = login(&app, "mgr@example.com", "pw-manager-1").await;
    let employee = login(&app, "emp@example.com", "pw-worker-1").await;

    let (status, body) = request(&app, "GET", "/users", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));

    for token in [&manager, &employee] {
        let (status, _) = request(&app, "GET", "/users", Some(token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = request(
            &app,
            "POST",
            "/users",
            Some(token),
            Some(json!({"name": "X", "email": "x@example.com", "password": "pw-x-12345"})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    let (status, _) = request(&app, "GET", "/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_creation_validations() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (app, _state) = test_app(&dir).await;
    let admin = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    // Duplicate email
    let (status, _) = request(
        &app,
        "POST",
        "/users",
        Some(&admin),
        Some(json!({"name": "Clone", "email": ADMIN_EMAIL, "password": "pw-clone-12"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Linked employee must exist
    let (status, _) = request(
        &app,
        "POST",
        "/users",
        Some(&admin),
        Some(json!({
            "name": "Linked",
            "email": "linked@example.com",
            "password": "pw-linked-1",
            "employee_id": 12345,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown roles never enter the system
    let (status, _) = request(
        &app,
        "POST",
        "/users",
        Some(&admin),
        Some(json!({
            "name": "Root",
            "email": "root@example.com",
            "password": "pw-root-12",
            "role": "superuser",
        })),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_unique_employee_link_policy() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = test_config(&dir);
    config.unique_employee_link = true;
    let state = tracker_server::core::AppState::initialize(&config)
        .await
        .expect("state");
    let app = tracker_server::core::build_app(state);

    let admin = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let employee_id = create_employee(&app, &admin, "Jo", "jo@co.com").await;

    create_user(&app, &admin, "jo@co.com", "pw-jo-123456", "employee", Some(employee_id)).await;

    let (status, body) = request(
        &app,
        "POST",
        "/users",
        Some(&admin),
        Some(json!({
            "name": "Second",
            "email": "second@co.com",
            "password": "pw-second-1",
            "employee_id": employee_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["code"], 3003);
}

fn seeded_admin() -> User {
    User {
        id: 1,
        name: "Administrator".to_string(),
        email: ADMIN_EMAIL.to_string(),
        password_hash: String::new(),
        role: "admin".to_string(),
        is_active: true,
        employee_id: None,
    }
}
