//! Route definitions for image upload and retrieval.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// Routes for the blob-store boundary.
///
/// ```text
/// POST /upload        -> upload_image
/// GET  /images/{key}  -> get_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(images::upload_image))
        .route("/images/{key}", get(images::get_image))
}
