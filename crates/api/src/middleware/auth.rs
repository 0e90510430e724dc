//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use storekeep_core::error::CoreError;
use storekeep_db::repositories::TokenRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated administrator extracted from a Bearer token in the
/// `Authorization` header.
///
/// Verification is a double check: the token must have an unexpired
/// persisted row in `admin_tokens` AND its signature and embedded expiry
/// claim must verify against the server secret. Either check failing
/// rejects the request. All failure modes (missing header, unknown token,
/// expired row, bad signature) collapse to a single 401 with an
/// uninformative message.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(admin: AdminUser) -> AppResult<Json<()>> {
///     tracing::info!(username = %admin.username, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// The administrator's username (from `claims.sub`).
    pub username: String,
    /// The presented token string, kept so logout can revoke exactly it.
    pub token: String,
}

/// The one rejection every verification failure collapses to.
fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized("Unauthorized".into()))
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(unauthorized)?;

        // Check 1: the persisted row must exist and be unexpired.
        TokenRepo::find_active(&state.pool, token)
            .await?
            .ok_or_else(unauthorized)?;

        // Check 2: signature and embedded expiry claim must verify.
        let claims =
            validate_token(token, &state.config.auth).map_err(|_| unauthorized())?;

        Ok(AdminUser {
            username: claims.sub,
            token: token.to_string(),
        })
    }
}
