//! Chirp routes
//!
//! Creation and deletion require a valid access token; deletion is
//! additionally owner-only. Reads are public.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ChirpService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chirpy_shared::types::{ChirpListQuery, ChirpResponse, CreateChirpRequest};
use uuid::Uuid;

/// POST /api/chirps - Create a chirp
///
/// The author is taken from the access token, never from the body.
pub async fn create_chirp(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateChirpRequest>,
) -> ApiResult<(StatusCode, Json<ChirpResponse>)> {
    let chirp = ChirpService::create(state.db(), auth.user_id, &req.body).await?;
    Ok((StatusCode::CREATED, Json(chirp)))
}

/// GET /api/chirps - List chirps
///
/// Accepts an optional `author_id` filter and `sort=asc|desc`
/// (ascending by creation time when absent).
pub async fn list_chirps(
    State(state): State<AppState>,
    Query(query): Query<ChirpListQuery>,
) -> ApiResult<Json<Vec<ChirpResponse>>> {
    let chirps = ChirpService::list(
        state.db(),
        query.author_id,
        query.sort.unwrap_or_default(),
    )
    .await?;
    Ok(Json(chirps))
}

/// GET /api/chirps/{chirp_id} - Fetch a single chirp
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<Uuid>,
) -> ApiResult<Json<ChirpResponse>> {
    let chirp = ChirpService::get(state.db(), chirp_id).await?;
    Ok(Json(chirp))
}

/// DELETE /api/chirps/{chirp_id} - Delete own chirp
///
/// A valid token for the wrong user gets 403, never 401.
pub async fn delete_chirp(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(chirp_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    ChirpService::delete(state.db(), auth.user_id, chirp_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
