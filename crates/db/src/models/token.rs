//! Bearer token model and DTOs.

use sqlx::FromRow;
use storekeep_core::types::Timestamp;

/// A bearer token row from the `admin_tokens` table.
///
/// The token string itself is the primary key; `username` is denormalized
/// (no foreign key at the storage layer). A row past `expires_at` is
/// semantically dead but is never garbage-collected.
#[derive(Debug, Clone, FromRow)]
pub struct AdminToken {
    pub token: String,
    pub username: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for persisting a freshly minted token.
pub struct CreateToken {
    pub token: String,
    pub username: String,
    pub expires_at: Timestamp,
}
