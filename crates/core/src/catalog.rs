//! Product catalog validation rules.

use crate::error::CoreError;

/// Validate the required fields of a new product.
///
/// `name` must be present and non-empty, `price` present and positive.
/// Returns the owned name and price so the caller does not re-unwrap.
/// Updates deliberately skip this check: an existing product may have its
/// fields overwritten with anything, blank included.
pub fn validate_required_fields(
    name: Option<&str>,
    price: Option<f64>,
) -> Result<(String, f64), CoreError> {
    let name = name.filter(|n| !n.is_empty());
    let price = price.filter(|p| *p > 0.0);
    match (name, price) {
        (Some(name), Some(price)) => Ok((name.to_string(), price)),
        _ => Err(CoreError::Validation("Missing required fields".into())),
    }
}
