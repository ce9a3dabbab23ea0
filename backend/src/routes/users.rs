//! User account routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chirpy_shared::types::{CreateUserRequest, UpdateUserRequest, UserResponse};

/// POST /api/users - Create an account
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = UserService::create(state.db(), &req.email, &req.password).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users - Update the authenticated user's credentials
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user =
        UserService::update_credentials(state.db(), auth.user_id, &req.email, &req.password)
            .await?;
    Ok(Json(user))
}
