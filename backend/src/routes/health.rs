//! Health check endpoint

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

/// GET /api/healthz
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}
