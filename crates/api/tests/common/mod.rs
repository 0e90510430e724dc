//! Shared helpers for HTTP-level integration tests.
//!
//! `build_test_app` mirrors the production router construction (same
//! middleware stack via `build_app_router`) with an in-memory blob store
//! standing in for the S3 bucket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use storekeep_api::auth::jwt::AuthConfig;
use storekeep_api::config::{BlobConfig, ServerConfig};
use storekeep_api::router::build_app_router;
use storekeep_api::state::AppState;
use storekeep_blob::MemoryBlobStore;

/// Signing secret shared by the test config and tests that decode tokens.
pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: AuthConfig {
            secret: TEST_SECRET.to_string(),
            token_ttl_mins: 120,
        },
        blob: BlobConfig {
            bucket: "test-bucket".to_string(),
            endpoint: None,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a fresh in-memory blob store.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        blob: Arc::new(MemoryBlobStore::new()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

/// GET a path with no auth.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a JSON body with the given method, optionally with a bearer token.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    send(app, request).await
}

/// POST a JSON body with no auth.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body, None).await
}

/// POST an empty body with a bearer token.
pub async fn post_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a multipart body containing a single file field.
pub async fn post_multipart(
    app: &Router,
    uri: &str,
    filename: &str,
    content_type: &str,
    bytes: &[u8],
) -> Response<Body> {
    let boundary = "storekeep-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Read a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Flow helpers
// ---------------------------------------------------------------------------

/// Register an admin account via the API.
pub async fn register_admin(app: &Router, username: &str, password: &str) {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/admin/register", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Register and log in, returning the issued bearer token.
pub async fn login_admin(app: &Router, username: &str, password: &str) -> String {
    register_admin(app, username, password).await;
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/admin/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}
