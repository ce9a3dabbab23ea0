//! Integration tests for the session lifecycle
//!
//! Covers the full flow: create account, login, refresh, revoke, and
//! the failure behavior after revocation.

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, uuid::Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_user_success() {
    let app = common::TestApp::new().await;

    let email = unique_email("create");
    let body = json!({
        "email": email,
        "password": "SecurePassword123!"
    });

    let (status, response) = app.post("/api/users", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["email"], email);
    assert_eq!(response["is_chirpy_red"], false);
    // The password hash must never appear in a response
    assert!(response.get("hashed_password").is_none());
    assert!(response.get("password").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_user_duplicate_email() {
    let app = common::TestApp::new().await;

    let email = unique_email("duplicate");
    let body = json!({
        "email": email,
        "password": "SecurePassword123!"
    });

    let (status, _) = app.post("/api/users", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.post("/api/users", &body.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_user_invalid_input() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": "not-an-email",
        "password": "SecurePassword123!"
    });
    let (status, _) = app.post("/api/users", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body = json!({
        "email": unique_email("weakpw"),
        "password": "123"
    });
    let (status, _) = app.post("/api/users", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_issues_both_tokens() {
    let app = common::TestApp::new().await;

    let email = unique_email("login");
    let password = "SecurePassword123!";
    let register = json!({ "email": email, "password": password });
    app.post("/api/users", &register.to_string()).await;

    let login = json!({ "email": email, "password": password });
    let (status, response) = app.post("/api/login", &login.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["email"], email);
    assert!(!response["token"].as_str().unwrap().is_empty());
    // Refresh tokens are 32 random bytes hex-encoded
    assert_eq!(response["refresh_token"].as_str().unwrap().len(), 64);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password_matches_unknown_email() {
    let app = common::TestApp::new().await;

    let email = unique_email("uniform");
    let register = json!({ "email": email, "password": "CorrectPassword123!" });
    app.post("/api/users", &register.to_string()).await;

    let wrong_password = json!({ "email": email, "password": "WrongPassword123!" });
    let (status_a, body_a) = app.post("/api/login", &wrong_password.to_string()).await;

    let unknown_email = json!({
        "email": unique_email("never-registered"),
        "password": "WrongPassword123!"
    });
    let (status_b, body_b) = app.post("/api/login", &unknown_email.to_string()).await;

    // Identical status and body: no account enumeration
    assert_eq!(status_a, StatusCode::UNAUTHORIZED);
    assert_eq!(status_b, StatusCode::UNAUTHORIZED);
    assert_eq!(body_a, body_b);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_full_session_lifecycle() {
    let app = common::TestApp::new().await;

    let email = unique_email("lifecycle");
    let password = "SecurePassword123!";
    let register = json!({ "email": email, "password": password });
    let (status, created) = app.post("/api/users", &register.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: serde_json::Value = serde_json::from_str(&created).unwrap();
    let user_id = created["id"].as_str().unwrap().to_string();

    // Login: access token identifies the same user, refresh token resolves
    let login = json!({ "email": email, "password": password });
    let (status, response) = app.post("/api/login", &login.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["id"].as_str().unwrap(), user_id);
    let refresh_token = response["refresh_token"].as_str().unwrap().to_string();

    // Refresh: a new, independently usable access token
    let bearer = format!("Bearer {}", refresh_token);
    let (status, refreshed) = app.post_with_auth("/api/refresh", "", &bearer).await;
    assert_eq!(status, StatusCode::OK);
    let refreshed: serde_json::Value = serde_json::from_str(&refreshed).unwrap();
    let new_access = refreshed["token"].as_str().unwrap().to_string();
    assert!(!new_access.is_empty());

    // The refreshed access token authenticates a protected call
    let chirp = json!({ "body": "posted with a refreshed token" });
    let (status, _) = app
        .post_with_auth(
            "/api/chirps",
            &chirp.to_string(),
            &format!("Bearer {}", new_access),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // Revoke, then the same refresh token must stop working
    let (status, _) = app.post_with_auth("/api/revoke", "", &bearer).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.post_with_auth("/api/refresh", "", &bearer).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_revoke_is_idempotent() {
    let app = common::TestApp::new().await;

    let email = unique_email("revoke");
    let password = "SecurePassword123!";
    app.post(
        "/api/users",
        &json!({ "email": email, "password": password }).to_string(),
    )
    .await;
    let (_, response) = app
        .post(
            "/api/login",
            &json!({ "email": email, "password": password }).to_string(),
        )
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let bearer = format!("Bearer {}", response["refresh_token"].as_str().unwrap());

    // First revoke, then again: both succeed, end state unchanged
    let (status, _) = app.post_with_auth("/api/revoke", "", &bearer).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.post_with_auth("/api/revoke", "", &bearer).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Revoking a token that never existed also succeeds
    let (status, _) = app
        .post_with_auth("/api/revoke", "", &format!("Bearer {}", "ab".repeat(32)))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_expired_refresh_token_fails_even_if_never_revoked() {
    let app = common::TestApp::new().await;

    let email = unique_email("expired");
    let password = "SecurePassword123!";
    app.post(
        "/api/users",
        &json!({ "email": email, "password": password }).to_string(),
    )
    .await;
    let (_, response) = app
        .post(
            "/api/login",
            &json!({ "email": email, "password": password }).to_string(),
        )
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let refresh_token = response["refresh_token"].as_str().unwrap().to_string();

    // Age the token past its window without revoking it
    sqlx::query("UPDATE refresh_tokens SET expires_at = NOW() - INTERVAL '1 day' WHERE token = $1")
        .bind(&refresh_token)
        .execute(&app.pool)
        .await
        .unwrap();

    let (status, _) = app
        .post_with_auth("/api/refresh", "", &format!("Bearer {}", refresh_token))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_refresh_with_garbage_token_fails() {
    let app = common::TestApp::new().await;

    let (status, _) = app
        .post_with_auth("/api/refresh", "", "Bearer definitely-not-a-refresh-token")
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_user_credentials() {
    let app = common::TestApp::new().await;

    let email = unique_email("update");
    let password = "SecurePassword123!";
    app.post(
        "/api/users",
        &json!({ "email": email, "password": password }).to_string(),
    )
    .await;
    let (_, response) = app
        .post(
            "/api/login",
            &json!({ "email": email, "password": password }).to_string(),
        )
        .await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let access = response["token"].as_str().unwrap().to_string();

    // PUT /api/users through the raw router (no helper for PUT)
    let new_email = unique_email("updated");
    let request = axum::http::Request::builder()
        .method("PUT")
        .uri("/api/users")
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", access))
        .body(axum::body::Body::from(
            json!({ "email": new_email, "password": "NewPassword456!" }).to_string(),
        ))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.app.clone(), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Old credentials no longer log in; new ones do
    let (status, _) = app
        .post(
            "/api/login",
            &json!({ "email": email, "password": password }).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .post(
            "/api/login",
            &json!({ "email": new_email, "password": "NewPassword456!" }).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}
