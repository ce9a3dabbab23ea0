//! User account operations
//!
//! Account creation and credential updates. Password hashing always runs
//! on the blocking thread pool; the stored hash never leaves this layer.

use crate::auth::PasswordService;
use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use chirpy_shared::types::UserResponse;
use chirpy_shared::validation::{validate_email, validate_password};
use sqlx::PgPool;
use uuid::Uuid;

/// User service for account management
pub struct UserService;

impl UserService {
    /// Create a new account
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password: &str,
    ) -> Result<UserResponse, ApiError> {
        validate_email(email).map_err(ApiError::Validation)?;
        validate_password(password).map_err(ApiError::Validation)?;

        if UserRepository::email_exists(pool, email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let hashed_password = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, email, &hashed_password)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::to_response(user))
    }

    /// Update the authenticated user's email and password
    pub async fn update_credentials(
        pool: &PgPool,
        user_id: Uuid,
        email: &str,
        password: &str,
    ) -> Result<UserResponse, ApiError> {
        validate_email(email).map_err(ApiError::Validation)?;
        validate_password(password).map_err(ApiError::Validation)?;

        let hashed_password = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::update_credentials(pool, user_id, email, &hashed_password)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(Self::to_response(user))
    }

    /// Upgrade a user to Chirpy Red (webhook-driven)
    pub async fn upgrade_to_chirpy_red(pool: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
        let upgraded = UserRepository::set_chirpy_red(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !upgraded {
            return Err(ApiError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    fn to_response(user: UserRecord) -> UserResponse {
        UserResponse {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
            is_chirpy_red: user.is_chirpy_red,
        }
    }
}
