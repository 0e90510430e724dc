pub mod admin;
pub mod health;
pub mod images;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                 service + database health (public)
///
/// /admin/register         create an administrator account (public)
/// /admin/login            exchange credentials for a bearer token (public)
/// /admin/logout           revoke the presented token (requires auth)
///
/// /products               GET list (public), POST/PUT/DELETE (requires auth)
/// /products/{id}          GET single product (public)
///
/// /upload                 multipart image upload
/// /images/{key}           raw image bytes + content type + etag
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/admin", admin::router())
        .merge(products::router())
        .merge(images::router())
}
