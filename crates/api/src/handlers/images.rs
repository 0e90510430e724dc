//! Handlers for image upload and retrieval.
//!
//! The catalog never stores image bytes itself: uploads go straight to the
//! blob store and products reference them by opaque key (the `picture`
//! field holds a key, not a URL).

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, Response, StatusCode};
use axum::Json;
use serde::Serialize;
use storekeep_core::error::CoreError;
use storekeep_core::images::generate_blob_key;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for `POST /upload`. The `url` field carries the blob key;
/// clients resolve it against `GET /images/{key}`.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /upload
///
/// Accept a single multipart file and store it in the blob store under a
/// `<timestamp>-<filename>` key. Two uploads of the same filename in the
/// same millisecond collide and the later write wins.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        // Take the first field that is actually a file.
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let key = generate_blob_key(&filename);

        state.blob.put(&key, data.to_vec(), &content_type).await?;

        tracing::info!(
            key = %key,
            size = data.len(),
            content_type = %content_type,
            "Image uploaded",
        );

        return Ok(Json(UploadResponse { url: key }));
    }

    Err(AppError::BadRequest("No file provided".into()))
}

/// GET /images/{key}
///
/// Stream a stored image back with its content type and entity tag.
pub async fn get_image(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Response<Body>> {
    let blob = state
        .blob
        .get(&key)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Image",
                id: key,
            })
        })?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, blob.content_type)
        .header(header::CONTENT_LENGTH, blob.bytes.len().to_string())
        .header(header::ETAG, blob.etag)
        .body(Body::from(blob.bytes))
        .unwrap())
}
