//! Route definitions for the `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// Update and delete address their target via the `id` in the request body,
/// not the path.
///
/// ```text
/// GET    /products       -> list_products (public)
/// POST   /products       -> create_product (requires auth)
/// PUT    /products       -> update_product (requires auth)
/// DELETE /products       -> delete_product (requires auth)
/// GET    /products/{id}  -> get_product (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products)
                .post(products::create_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/products/{id}", get(products::get_product))
}
