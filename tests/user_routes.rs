mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{admin_token, create_employee, create_entry, send, sqlite_app};

#[tokio::test]
async fn admin_creates_and_lists_employees() {
    let app = sqlite_app().await;
    let admin = admin_token(&app).await;

    let (id, _) = create_employee(&app, &admin, "anna@company.com", 20.0, 30.0).await;

    let (status, body) = send(&app, Method::GET, "/users", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["data"].as_array().expect("users should be a list");
    assert_eq!(users.len(), 2);
    let anna = users
        .iter()
        .find(|user| user["id"] == id.as_str())
        .expect("new user should be listed");
    assert_eq!(anna["role"], "employee");
    assert_eq!(anna["hourly_rate_delegation"], 30.0);
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let app = sqlite_app().await;
    let admin = admin_token(&app).await;
    create_employee(&app, &admin, "anna@company.com", 20.0, 0.0).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(&admin),
        Some(json!({
            "email": "Anna@Company.com",
            "password": "password123",
            "full_name": "Anna Druga",
            "hourly_rate": 18.0,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn employees_cannot_manage_users() {
    let app = sqlite_app().await;
    let admin = admin_token(&app).await;
    let (anna_id, anna) = create_employee(&app, &admin, "anna@company.com", 20.0, 0.0).await;
    let (piotr_id, _) = create_employee(&app, &admin, "piotr@company.com", 25.0, 0.0).await;

    let (status, body) = send(&app, Method::GET, "/users", Some(&anna), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied");

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/users/{anna_id}"),
        Some(&anna),
        Some(json!({ "hourly_rate": 99.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/users/{piotr_id}"),
        Some(&anna),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::GET, "/reports/salary", Some(&anna), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn employee_reads_only_own_profile() {
    let app = sqlite_app().await;
    let admin = admin_token(&app).await;
    let (anna_id, anna) = create_employee(&app, &admin, "anna@company.com", 20.0, 0.0).await;
    let (piotr_id, _) = create_employee(&app, &admin, "piotr@company.com", 25.0, 0.0).await;

    let (status, body) = send(&app, Method::GET, &format!("/users/{anna_id}"), Some(&anna), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "anna@company.com");

    let (status, _) = send(&app, Method::GET, &format!("/users/{piotr_id}"), Some(&anna), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_updates_rates_and_password() {
    let app = sqlite_app().await;
    let admin = admin_token(&app).await;
    let (anna_id, _) = create_employee(&app, &admin, "anna@company.com", 20.0, 0.0).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/users/{anna_id}"),
        Some(&admin),
        Some(json!({
            "position": "Senior Developer",
            "hourly_rate_delegation": 35.0,
            "password": "new-password-1",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["position"], "Senior Developer");
    assert_eq!(body["data"]["hourly_rate_delegation"], 35.0);
    assert_eq!(body["data"]["hourly_rate"], 20.0);

    common::login(&app, "anna@company.com", "new-password-1").await;
}

#[tokio::test]
async fn deleting_user_cascades_entries() {
    let app = sqlite_app().await;
    let admin = admin_token(&app).await;
    let (anna_id, anna) = create_employee(&app, &admin, "anna@company.com", 20.0, 30.0).await;
    create_entry(&app, &anna, "2026-03-02", 8.0, Some("office")).await;
    create_entry(&app, &anna, "2026-03-03", 4.0, Some("delegacja trip")).await;

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/users/{anna_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["removed_entries"], 2);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/time-entries?user_id={anna_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let (_, body) = send(&app, Method::GET, "/users", Some(&admin), None).await;
    let users = body["data"].as_array().expect("users should be a list");
    assert!(users.iter().all(|user| user["id"] != anna_id.as_str()));

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/users/{anna_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_cannot_delete_self() {
    let app = sqlite_app().await;
    let admin = admin_token(&app).await;
    let (_, me) = send(&app, Method::GET, "/auth/me", Some(&admin), None).await;
    let admin_id = me["data"]["id"].as_str().expect("id should be present");

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/users/{admin_id}"),
        Some(&admin),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "You cannot delete your own account");
}

#[tokio::test]
async fn salary_report_covers_every_user() {
    let app = sqlite_app().await;
    let admin = admin_token(&app).await;
    let (anna_id, anna) = create_employee(&app, &admin, "anna@company.com", 20.0, 30.0).await;
    let (piotr_id, piotr) = create_employee(&app, &admin, "piotr@company.com", 20.0, 0.0).await;
    for token in [&anna, &piotr] {
        create_entry(&app, token, "2026-03-02", 8.0, Some("office")).await;
        create_entry(&app, token, "2026-03-03", 4.0, Some("delegacja trip")).await;
    }

    let (status, body) = send(&app, Method::GET, "/reports/salary", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let lines = body["data"].as_array().expect("report should be a list");
    assert_eq!(lines.len(), 3);

    let line_for = |id: &str| {
        lines
            .iter()
            .find(|line| line["user_id"] == id)
            .cloned()
            .expect("user should have a line")
    };
    let anna_line = line_for(&anna_id);
    assert_eq!(anna_line["total_hours"], 12.0);
    assert_eq!(anna_line["total_salary"], 280.0);
    assert_eq!(anna_line["delegation_hours"], 4.0);

    let piotr_line = line_for(&piotr_id);
    assert_eq!(piotr_line["total_salary"], 240.0);
}
