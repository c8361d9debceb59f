//! Shared helpers for integration tests
//!
//! Builds an application over a throwaway SQLite file and drives it
//! through the router without binding a socket.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use tracker_server::auth::JwtConfig;
use tracker_server::core::{AppState, Config, build_app};

pub const TEST_SECRET: &str = "integration-test-secret-key-0123456789";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin-secret";

pub fn test_config(dir: &tempfile::TempDir) -> Config {
    Config {
        work_dir: dir.path().to_string_lossy().into_owned(),
        database_path: dir.path().join("test.db").to_string_lossy().into_owned(),
        http_port: 0,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiration_minutes: 60,
        },
        environment: "test".to_string(),
        unique_employee_link: false,
        admin_email: ADMIN_EMAIL.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
    }
}

/// Fresh app over a fresh database, with the bootstrap admin seeded
pub async fn test_app(dir: &tempfile::TempDir) -> (Router, AppState) {
    let state = AppState::initialize(&test_config(dir))
        .await
        .expect("Failed to initialize test state");
    (build_app(state.clone()), state)
}

/// Issue a request and return (status, parsed JSON body)
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
        None => builder.body(Body::empty()).expect("Failed to build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

/// Log in and return the access token
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({"email": email, "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["access_token"]
        .as_str()
        .expect("missing access_token")
        .to_string()
}

/// Create an employee as the given caller, returning its id
pub async fn create_employee(app: &Router, token: &str, name: &str, email: &str) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/employees",
        Some(token),
        Some(serde_json::json!({"name": name, "email": email})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "employee create failed: {body}");
    body["id"].as_i64().expect("missing employee id")
}

/// Create a user account as the given caller, returning its id
pub async fn create_user(
    app: &Router,
    token: &str,
    email: &str,
    password: &str,
    role: &str,
    employee_id: Option<i64>,
) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/users",
        Some(token),
        Some(serde_json::json!({
            "name": email,
            "email": email,
            "password": password,
            "role": role,
            "employee_id": employee_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "user create failed: {body}");
    body["id"].as_i64().expect("missing user id")
}
