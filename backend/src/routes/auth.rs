//! Session routes: login, refresh, revoke
//!
//! Login exchanges credentials for an access token plus a refresh token.
//! Refresh and revoke carry the refresh token in the Authorization
//! header (`Bearer <token>`), not in the body.

use crate::auth::bearer_token;
use crate::error::ApiResult;
use crate::services::SessionService;
use crate::state::AppState;
use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use chirpy_shared::types::{LoginRequest, LoginResponse, TokenResponse};

/// POST /api/login
///
/// Unknown email and wrong password are indistinguishable in the
/// response. The optional `expires_in_seconds` is clamped to one hour.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = SessionService::login(
        state.db(),
        state.jwt(),
        state.config(),
        &req.email,
        &req.password,
        req.expires_in_seconds,
    )
    .await?;

    Ok(Json(response))
}

/// POST /api/refresh
///
/// Resolves the refresh token and mints a new access token. The refresh
/// token itself is not rotated.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<TokenResponse>> {
    let refresh_token = bearer_token(&headers)?;
    let token = SessionService::refresh(state.db(), state.jwt(), refresh_token).await?;

    Ok(Json(TokenResponse { token }))
}

/// POST /api/revoke
///
/// Revokes the refresh token; already-issued access tokens remain valid
/// until their own expiry.
pub async fn revoke(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<StatusCode> {
    let refresh_token = bearer_token(&headers)?;
    SessionService::revoke(state.db(), refresh_token).await?;

    Ok(StatusCode::NO_CONTENT)
}
