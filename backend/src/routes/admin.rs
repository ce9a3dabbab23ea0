//! Admin routes: metrics page and dev-only reset

use crate::error::{ApiError, ApiResult};
use crate::repositories::UserRepository;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Html};
use tracing::warn;

/// GET /admin/metrics - HTML page with the fileserver hit count
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    let hits = state.fileserver_hits();
    Html(format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {} times!</p>\n  </body>\n</html>",
        hits
    ))
}

/// POST /admin/reset - Reset the hit counter and delete all users
///
/// Only available when the platform is "dev"; anywhere else this is a
/// hard 403.
pub async fn reset(State(state): State<AppState>) -> ApiResult<StatusCode> {
    if !state.config().is_dev_platform() {
        return Err(ApiError::Forbidden(
            "Reset is only available on the dev platform".to_string(),
        ));
    }

    warn!("Resetting hit counter and deleting all users");
    state.reset_fileserver_hits();
    UserRepository::delete_all(state.db())
        .await
        .map_err(ApiError::Internal)?;

    Ok(StatusCode::OK)
}
