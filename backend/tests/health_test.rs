//! Integration test for the health endpoint

mod common;

use axum::http::StatusCode;

#[tokio::test]
#[ignore = "requires database"]
async fn test_healthz() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/api/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}
