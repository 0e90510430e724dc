//! Administrator account model and DTOs.

use sqlx::FromRow;
use storekeep_core::types::{RecordId, Timestamp};

/// Full administrator row from the `admins` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// Deliberately does not derive `Serialize`; nothing in the HTTP surface
/// returns an administrator body.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: RecordId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new administrator.
pub struct CreateAdmin {
    pub id: RecordId,
    pub username: String,
    pub password_hash: String,
}
