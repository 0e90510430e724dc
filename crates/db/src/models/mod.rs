//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Where updates exist, a patch DTO (all `Option` fields)

pub mod admin;
pub mod product;
pub mod token;
