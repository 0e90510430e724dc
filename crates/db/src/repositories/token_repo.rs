//! Repository for the `admin_tokens` table.

use sqlx::PgPool;

use crate::models::token::{AdminToken, CreateToken};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "token, username, expires_at, created_at";

/// Provides access to persisted bearer tokens.
pub struct TokenRepo;

impl TokenRepo {
    /// Insert a freshly minted token, returning the created row.
    ///
    /// Additive: prior tokens for the same username stay valid.
    pub async fn create(pool: &PgPool, input: &CreateToken) -> Result<AdminToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_tokens (token, username, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminToken>(&query)
            .bind(&input.token)
            .bind(&input.username)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a token row by exact match, filtered to unexpired rows.
    ///
    /// This is the storage half of token verification; the signature check
    /// happens separately in the api layer.
    pub async fn find_active(pool: &PgPool, token: &str) -> Result<Option<AdminToken>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_tokens
             WHERE token = $1
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, AdminToken>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Delete a token row (logout). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_tokens WHERE token = $1")
            .bind(token)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
