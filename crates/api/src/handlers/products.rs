//! Handlers for the `/products` resource.
//!
//! Reads are open to anonymous callers; writes require a verified bearer
//! token and short-circuit before any storage access when it is missing or
//! invalid.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use storekeep_core::catalog::validate_required_fields;
use storekeep_core::error::CoreError;
use storekeep_core::ident::generate_record_id;
use storekeep_core::types::RecordId;
use storekeep_db::models::product::{CreateProduct, Product, UpdateProduct};
use storekeep_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /products`.
///
/// The required fields are optional at the schema level so their absence
/// surfaces as the documented validation error, not a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
    pub picture: Option<String>,
}

/// Request body for `PUT /products`: the target id plus a shallow-merge
/// patch. Supplied fields overwrite unconditionally; `name`/`price` are not
/// re-validated once a product exists.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub patch: UpdateProduct,
}

/// Request body for `DELETE /products`.
#[derive(Debug, Deserialize)]
pub struct DeleteProductRequest {
    pub id: Option<RecordId>,
}

/// The id field is required on update and delete.
fn require_id(id: Option<RecordId>) -> AppResult<RecordId> {
    id.filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Product ID required".into())))
}

fn product_not_found(id: RecordId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}

// ---------------------------------------------------------------------------
// Read path (anonymous)
// ---------------------------------------------------------------------------

/// GET /products
///
/// Every product row, storage order, no pagination.
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| product_not_found(id))?;
    Ok(Json(product))
}

// ---------------------------------------------------------------------------
// Write path (bearer token required)
// ---------------------------------------------------------------------------

/// POST /products
///
/// Create a product. `name` and `price` are required; the remaining fields
/// default to empty/zero/unset.
pub async fn create_product(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let (name, price) = validate_required_fields(input.name.as_deref(), input.price)?;

    let create = CreateProduct {
        id: generate_record_id(),
        name,
        description: input.description.unwrap_or_default(),
        price,
        category: input.category.unwrap_or_default(),
        stock: input.stock.unwrap_or(0),
        picture: input.picture,
    };

    let product = ProductRepo::create(&state.pool, &create).await?;

    tracing::info!(
        product_id = %product.id,
        name = %product.name,
        username = %admin.username,
        "Product created",
    );

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /products
///
/// Shallow-merge update addressed by the `id` in the body. Returns the
/// merged record.
pub async fn update_product(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProductRequest>,
) -> AppResult<Json<Product>> {
    let id = require_id(input.id)?;

    let product = ProductRepo::update(&state.pool, &id, &input.patch)
        .await?
        .ok_or_else(|| product_not_found(id))?;

    tracing::info!(
        product_id = %product.id,
        username = %admin.username,
        "Product updated",
    );

    Ok(Json(product))
}

/// DELETE /products
///
/// Delete the product addressed by the `id` in the body, returning its
/// pre-deletion snapshot.
pub async fn delete_product(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<DeleteProductRequest>,
) -> AppResult<Json<Product>> {
    let id = require_id(input.id)?;

    let product = ProductRepo::delete(&state.pool, &id)
        .await?
        .ok_or_else(|| product_not_found(id))?;

    tracing::info!(
        product_id = %product.id,
        username = %admin.username,
        "Product deleted",
    );

    Ok(Json(product))
}
