//! Handlers for the `/admin` resource (register, login, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use storekeep_core::error::CoreError;
use storekeep_core::ident::generate_record_id;
use storekeep_db::models::admin::CreateAdmin;
use storekeep_db::models::token::CreateToken;
use storekeep_db::repositories::{AdminRepo, TokenRepo};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/register` and `POST /admin/login`.
///
/// Fields are optional at the schema level so that absence surfaces as the
/// documented validation error rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Response body for `POST /admin/register`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Response body for `POST /admin/login`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Both credential fields must be present and non-empty before any storage
/// access happens.
fn require_credentials(input: CredentialsRequest) -> AppResult<(String, String)> {
    let username = input.username.filter(|u| !u.is_empty());
    let password = input.password.filter(|p| !p.is_empty());
    match (username, password) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => Err(AppError::Core(CoreError::Validation(
            "Username and password are required".into(),
        ))),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /admin/register
///
/// Create a new administrator account. No token is issued; the caller logs
/// in separately.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Json<RegisterResponse>> {
    let (username, password) = require_credentials(input)?;

    // Pre-check for a friendly conflict message. Racing registrations are
    // caught by the uq_admins_username constraint and surface as the same
    // conflict status.
    if AdminRepo::find_by_username(&state.pool, &username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username already exists".into(),
        )));
    }

    let hashed = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = AdminRepo::create(
        &state.pool,
        &CreateAdmin {
            id: generate_record_id(),
            username,
            password_hash: hashed,
        },
    )
    .await?;

    tracing::info!(admin_id = %admin.id, username = %admin.username, "Admin registered");

    Ok(Json(RegisterResponse {
        success: true,
        message: "Admin user created successfully",
    }))
}

/// POST /admin/login
///
/// Authenticate with username + password. Mints a signed bearer token,
/// persists it, and returns it. Prior tokens for the same account stay
/// valid. The error message is identical for an unknown username and a
/// wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (username, password) = require_credentials(input)?;

    let admin = AdminRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    let password_valid = verify_password(&password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = generate_token(&admin.username, &state.config.auth)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let expires_at = Utc::now() + chrono::Duration::minutes(state.config.auth.token_ttl_mins);

    TokenRepo::create(
        &state.pool,
        &CreateToken {
            token: token.clone(),
            username: admin.username.clone(),
            expires_at,
        },
    )
    .await?;

    tracing::info!(username = %admin.username, "Admin logged in");

    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}

/// POST /admin/logout
///
/// Revoke exactly the presented token by deleting its row. Returns 204.
pub async fn logout(State(state): State<AppState>, admin: AdminUser) -> AppResult<StatusCode> {
    TokenRepo::delete(&state.pool, &admin.token).await?;

    tracing::info!(username = %admin.username, "Admin logged out");

    Ok(StatusCode::NO_CONTENT)
}
