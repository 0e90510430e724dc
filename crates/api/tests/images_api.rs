//! HTTP-level integration tests for image upload and retrieval through the
//! blob-store boundary (in-memory store in tests).

mod common;

use axum::http::header::{CONTENT_TYPE, ETAG};
use axum::http::StatusCode;
use common::{body_bytes, body_json, get, post_multipart};
use sqlx::PgPool;

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-payload";

/// Upload returns the generated key, and fetching that key round-trips the
/// bytes with their content type and an entity tag.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_then_fetch(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_multipart(&app, "/upload", "pen.png", "image/png", PNG_BYTES).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let key = json["url"].as_str().expect("upload must return a key");
    assert!(
        key.ends_with("-pen.png"),
        "key must be <timestamp>-<filename>, got {key}"
    );

    let response = get(&app, &format!("/images/{key}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "image/png"
    );
    assert!(
        response.headers().contains_key(ETAG),
        "response must carry an entity tag"
    );
    assert_eq!(body_bytes(response).await, PNG_BYTES);
}

/// Unknown keys are a 404, not an empty body.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_fetch_unknown_key(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(&app, "/images/1723000000000-ghost.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Image not found");
}

/// A multipart body without any file field is a bad request.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_without_file(pool: PgPool) {
    let app = common::build_test_app(pool);

    // A form field with no filename is not a file.
    let boundary = "storekeep-test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{boundary}--\r\n"
    );
    let request = axum::http::Request::builder()
        .method(axum::http::Method::POST)
        .uri("/upload")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(axum::body::Body::from(body))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request)
        .await
        .expect("request should not fail at the transport level");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No file provided");
}

/// Two uploads of the same filename produce keys that resolve independently
/// unless they collide within one millisecond, in which case the later
/// write wins. Either way the last upload's bytes are retrievable.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_same_filename_last_write_wins(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = body_json(post_multipart(&app, "/upload", "a.png", "image/png", b"one").await).await;
    let second =
        body_json(post_multipart(&app, "/upload", "a.png", "image/png", b"two").await).await;
    let key = second["url"].as_str().unwrap();

    let response = get(&app, &format!("/images/{key}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"two");

    // The first key still resolves to something (same key -> overwritten,
    // distinct key -> original bytes).
    let first_key = first["url"].as_str().unwrap();
    let response = get(&app, &format!("/images/{first_key}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
