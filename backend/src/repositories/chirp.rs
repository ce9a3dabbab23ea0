//! Chirp repository for database operations

use anyhow::Result;
use chirpy_shared::types::SortOrder;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Chirp record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChirpRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

/// Chirp repository for database operations
pub struct ChirpRepository;

impl ChirpRepository {
    /// Create a new chirp
    pub async fn create(pool: &PgPool, user_id: Uuid, body: &str) -> Result<ChirpRecord> {
        let chirp = sqlx::query_as::<_, ChirpRecord>(
            r#"
            INSERT INTO chirps (body, user_id)
            VALUES ($1, $2)
            RETURNING id, created_at, updated_at, body, user_id
            "#,
        )
        .bind(body)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(chirp)
    }

    /// Find a chirp by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ChirpRecord>> {
        let chirp = sqlx::query_as::<_, ChirpRecord>(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(chirp)
    }

    /// List chirps, optionally filtered to one author, ordered by
    /// creation time
    pub async fn list(
        pool: &PgPool,
        author_id: Option<Uuid>,
        sort: SortOrder,
    ) -> Result<Vec<ChirpRecord>> {
        let query = match sort {
            SortOrder::Asc => {
                r#"
                SELECT id, created_at, updated_at, body, user_id
                FROM chirps
                WHERE $1::uuid IS NULL OR user_id = $1
                ORDER BY created_at ASC
                "#
            }
            SortOrder::Desc => {
                r#"
                SELECT id, created_at, updated_at, body, user_id
                FROM chirps
                WHERE $1::uuid IS NULL OR user_id = $1
                ORDER BY created_at DESC
                "#
            }
        };

        let chirps = sqlx::query_as::<_, ChirpRecord>(query)
            .bind(author_id)
            .fetch_all(pool)
            .await?;

        Ok(chirps)
    }

    /// Delete a chirp by ID
    ///
    /// Returns false if no such chirp existed. Ownership is checked in
    /// the service layer before this runs.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM chirps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
