//! Chirp operations
//!
//! Creation validates and profanity-cleans the body; deletion enforces
//! ownership with an exact author match. Ownership failures are 403,
//! distinct from the 401 an invalid token produces.

use crate::error::ApiError;
use crate::repositories::{ChirpRecord, ChirpRepository};
use chirpy_shared::types::{ChirpResponse, SortOrder};
use chirpy_shared::validation::{clean_chirp_body, validate_chirp_body};
use sqlx::PgPool;
use uuid::Uuid;

/// Chirp service
pub struct ChirpService;

impl ChirpService {
    /// Create a chirp authored by the authenticated user
    pub async fn create(
        pool: &PgPool,
        author_id: Uuid,
        body: &str,
    ) -> Result<ChirpResponse, ApiError> {
        validate_chirp_body(body).map_err(ApiError::Validation)?;
        let cleaned = clean_chirp_body(body);

        let chirp = ChirpRepository::create(pool, author_id, &cleaned)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::to_response(chirp))
    }

    /// Fetch a single chirp
    pub async fn get(pool: &PgPool, chirp_id: Uuid) -> Result<ChirpResponse, ApiError> {
        let chirp = ChirpRepository::find_by_id(pool, chirp_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Chirp not found".to_string()))?;

        Ok(Self::to_response(chirp))
    }

    /// List chirps, optionally filtered to one author
    pub async fn list(
        pool: &PgPool,
        author_id: Option<Uuid>,
        sort: SortOrder,
    ) -> Result<Vec<ChirpResponse>, ApiError> {
        let chirps = ChirpRepository::list(pool, author_id, sort)
            .await
            .map_err(ApiError::Internal)?;

        Ok(chirps.into_iter().map(Self::to_response).collect())
    }

    /// Delete a chirp, owner only
    ///
    /// The check is exact equality between the authenticated user and
    /// the chirp's author; there is no admin override.
    pub async fn delete(pool: &PgPool, user_id: Uuid, chirp_id: Uuid) -> Result<(), ApiError> {
        let chirp = ChirpRepository::find_by_id(pool, chirp_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Chirp not found".to_string()))?;

        if chirp.user_id != user_id {
            return Err(ApiError::Forbidden("Not the chirp author".to_string()));
        }

        ChirpRepository::delete(pool, chirp_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(())
    }

    fn to_response(chirp: ChirpRecord) -> ChirpResponse {
        ChirpResponse {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}
