//! Payment provider webhooks
//!
//! Polka calls in with an `ApiKey` Authorization header; the key is a
//! static machine-to-machine secret, deliberately on a separate scheme
//! word from user bearer tokens.

use crate::auth::api_key;
use crate::error::{ApiError, ApiResult};
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use chirpy_shared::types::PolkaWebhook;

const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// POST /api/polka/webhooks
///
/// Only `user.upgraded` is acted on; any other event is acknowledged
/// with 204 and ignored.
pub async fn polka_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PolkaWebhook>,
) -> ApiResult<StatusCode> {
    let key = api_key(&headers)?;
    if key != state.config().polka_key {
        return Err(ApiError::auth_failure());
    }

    if payload.event != USER_UPGRADED_EVENT {
        return Ok(StatusCode::NO_CONTENT);
    }

    UserService::upgrade_to_chirpy_red(state.db(), payload.data.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
