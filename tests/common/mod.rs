#![allow(dead_code)]

use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt; // for `oneshot`

use timesheet::{
    routes::{API_PREFIX, app},
    test_helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, sqlite_state},
};

pub const SECRET: &[u8] = b"integration-secret";

pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

pub async fn sqlite_app() -> Router {
    app(sqlite_state(SECRET).await)
}

pub async fn send(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(api_path(path));
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should succeed");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be json")
    };
    (status, json)
}

pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["data"]["access_token"]
        .as_str()
        .expect("token should be present")
        .to_string()
}

pub async fn admin_token(app: &Router) -> String {
    login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await
}

/// Creates an employee through the API and returns `(id, token)`.
pub async fn create_employee(
    app: &Router,
    admin: &str,
    email: &str,
    hourly_rate: f64,
    hourly_rate_delegation: f64,
) -> (String, String) {
    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        Some(admin),
        Some(json!({
            "email": email,
            "password": "password123",
            "full_name": "Anna Kowalska",
            "position": "Developer",
            "hourly_rate": hourly_rate,
            "hourly_rate_delegation": hourly_rate_delegation,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create user failed: {body}");
    let id = body["data"]["id"]
        .as_str()
        .expect("id should be present")
        .to_string();
    let token = login(app, email, "password123").await;
    (id, token)
}

pub async fn create_entry(
    app: &Router,
    token: &str,
    date: &str,
    hours: f64,
    description: Option<&str>,
) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/time-entries",
        Some(token),
        Some(json!({ "date": date, "hours": hours, "description": description })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create entry failed: {body}");
    body["data"]["id"]
        .as_str()
        .expect("id should be present")
        .to_string()
}
