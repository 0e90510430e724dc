//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storekeep_core::types::RecordId;

/// Full product row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: i32,
    pub picture: Option<String>,
}

/// DTO for inserting a new product. The id is assigned by the caller and
/// optional fields have already been defaulted.
pub struct CreateProduct {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: i32,
    pub picture: Option<String>,
}

/// Patch DTO for updating an existing product. Only non-`None` fields are
/// applied; a supplied value overwrites unconditionally (blank included).
/// `name` and `price` are not re-validated on update.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<i32>,
    pub picture: Option<String>,
}
