//! Refresh token repository
//!
//! The refresh_tokens table is the single source of truth for session
//! revocation. Every mutation here is one atomic row operation, and no
//! token state is ever cached in memory: a crash must not resurrect a
//! revoked token.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Refresh token repository
pub struct RefreshTokenRepository;

impl RefreshTokenRepository {
    /// Persist a freshly issued refresh token for a user
    pub async fn insert(
        pool: &PgPool,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Resolve a refresh token to its owner
    ///
    /// Returns None for a token that is unknown, revoked, or past its
    /// expiry window. Only the owner id is returned, never the row, so
    /// callers cannot hold a resolved record across a revocation.
    pub async fn resolve(pool: &PgPool, token: &str) -> Result<Option<Uuid>> {
        let user_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT user_id
            FROM refresh_tokens
            WHERE token = $1
              AND revoked_at IS NULL
              AND expires_at > NOW()
            "#,
        )
        .bind(token)
        .fetch_optional(pool)
        .await?;

        Ok(user_id)
    }

    /// Revoke a refresh token
    ///
    /// Idempotent: revoking an already-revoked or unknown token is a
    /// no-op success, since the desired end state already holds. The
    /// `revoked_at IS NULL` guard keeps the original revocation
    /// timestamp permanent.
    pub async fn revoke(pool: &PgPool, token: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked_at = NOW(), updated_at = NOW()
            WHERE token = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token)
        .execute(pool)
        .await?;

        Ok(())
    }
}
