//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod product_repo;
pub mod token_repo;

pub use admin_repo::AdminRepo;
pub use product_repo::ProductRepo;
pub use token_repo::TokenRepo;
