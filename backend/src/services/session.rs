//! Session management: login, refresh, revoke
//!
//! Composes the password hasher, the access token codec and the refresh
//! token store. A session moves Anonymous -> Authenticated (access +
//! refresh issued) -> Refreshed (new access, same refresh) -> Revoked ->
//! Expired. Revoking invalidates only the refresh token; access tokens
//! already issued remain valid until they expire naturally, which is the
//! accepted tradeoff of stateless access tokens.

use crate::auth::{make_refresh_token, JwtService, PasswordService};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::repositories::{RefreshTokenRepository, UserRepository};
use chirpy_shared::types::LoginResponse;
use chrono::{Duration, Utc};
use sqlx::PgPool;

/// Hard ceiling on a requested access token lifetime (one hour)
const MAX_ACCESS_TOKEN_TTL_SECS: i64 = 3600;

/// Session service for authentication operations
pub struct SessionService;

impl SessionService {
    /// Clamp a caller-requested token lifetime to [1, 3600] seconds,
    /// defaulting to the maximum when absent or non-positive
    fn clamp_ttl(requested: Option<i64>) -> i64 {
        match requested {
            Some(secs) if secs > 0 && secs < MAX_ACCESS_TOKEN_TTL_SECS => secs,
            _ => MAX_ACCESS_TOKEN_TTL_SECS,
        }
    }

    /// Log in with email and password
    ///
    /// Unknown email and wrong password produce the identical failure;
    /// callers must not be able to tell the two apart. On success both
    /// an access token and a persisted refresh token are issued.
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        config: &AppConfig,
        email: &str,
        password: &str,
        expires_in_seconds: Option<i64>,
    ) -> Result<LoginResponse, ApiError> {
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(ApiError::auth_failure)?;

        // Verify password on the blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(password.to_string(), user.hashed_password.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::auth_failure());
        }

        let ttl = Self::clamp_ttl(expires_in_seconds);
        let token = jwt.issue(user.id, ttl).map_err(ApiError::Internal)?;

        let refresh_token = make_refresh_token().map_err(ApiError::Internal)?;
        let expires_at = Utc::now() + Duration::days(config.jwt.refresh_token_expiry_days);
        RefreshTokenRepository::insert(pool, &refresh_token, user.id, expires_at)
            .await
            .map_err(ApiError::Internal)?;

        Ok(LoginResponse {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
            is_chirpy_red: user.is_chirpy_red,
            token,
            refresh_token,
        })
    }

    /// Mint a new access token from a refresh token
    ///
    /// The refresh token is resolved against the store (not found,
    /// revoked and expired all fail identically) and is not rotated.
    pub async fn refresh(
        pool: &PgPool,
        jwt: &JwtService,
        refresh_token: &str,
    ) -> Result<String, ApiError> {
        let user_id = RefreshTokenRepository::resolve(pool, refresh_token)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(ApiError::auth_failure)?;

        jwt.issue_default(user_id).map_err(ApiError::Internal)
    }

    /// Revoke a refresh token (logout)
    ///
    /// Idempotent; revoking an unknown or already-revoked token
    /// succeeds. Access tokens already in the wild stay valid until
    /// their own expiry.
    pub async fn revoke(pool: &PgPool, refresh_token: &str) -> Result<(), ApiError> {
        RefreshTokenRepository::revoke(pool, refresh_token)
            .await
            .map_err(ApiError::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_ttl_defaults_to_one_hour() {
        assert_eq!(SessionService::clamp_ttl(None), 3600);
        assert_eq!(SessionService::clamp_ttl(Some(0)), 3600);
        assert_eq!(SessionService::clamp_ttl(Some(-5)), 3600);
    }

    #[test]
    fn test_clamp_ttl_caps_at_one_hour() {
        assert_eq!(SessionService::clamp_ttl(Some(86400)), 3600);
        assert_eq!(SessionService::clamp_ttl(Some(3600)), 3600);
    }

    #[test]
    fn test_clamp_ttl_passes_short_lifetimes_through() {
        assert_eq!(SessionService::clamp_ttl(Some(120)), 120);
        assert_eq!(SessionService::clamp_ttl(Some(1)), 1);
    }
}
