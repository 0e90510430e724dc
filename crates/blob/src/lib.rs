//! Blob storage boundary for uploaded images.
//!
//! The catalog treats image storage as an external collaborator with
//! put/get-by-key semantics. [`BlobStore`] is that seam: the production
//! implementation targets an S3-compatible bucket, and tests use the
//! in-memory implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

/// Error from the blob transport. Callers map this to an internal error;
/// the underlying detail is logged, never surfaced.
#[derive(Debug, thiserror::Error)]
#[error("Blob store error: {0}")]
pub struct BlobError(String);

impl BlobError {
    fn new(context: &str, err: impl std::fmt::Display) -> Self {
        Self(format!("{context}: {err}"))
    }
}

/// A blob fetched from storage, with the metadata needed to serve it.
#[derive(Debug, Clone)]
pub struct StoredBlob {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub etag: String,
}

/// Opaque key-to-bytes storage.
///
/// `put` overwrites unconditionally (last write wins); `get` returns
/// `Ok(None)` for an unknown key so the caller owns the not-found policy.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), BlobError>;

    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, BlobError>;
}

// ---------------------------------------------------------------------------
// S3 implementation
// ---------------------------------------------------------------------------

/// S3-backed blob store.
///
/// An endpoint override with path-style addressing makes this work against
/// S3-compatible stores (R2, MinIO) as well as AWS proper.
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3BlobStore {
    /// Connect using the ambient AWS environment (credentials, region),
    /// optionally overriding the endpoint.
    pub async fn connect(bucket: String, endpoint: Option<String>) -> Self {
        let base = aws_config::load_from_env().await;

        let client = match endpoint {
            Some(url) => {
                let conf = aws_sdk_s3::config::Builder::from(&base)
                    .endpoint_url(url)
                    .force_path_style(true)
                    .build();
                aws_sdk_s3::Client::from_conf(conf)
            }
            None => aws_sdk_s3::Client::new(&base),
        };

        Self { client, bucket }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), BlobError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| BlobError::new("put_object failed", e))?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, BlobError> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(err) => {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_no_such_key())
                {
                    return Ok(None);
                }
                return Err(BlobError::new("get_object failed", err));
            }
        };

        let content_type = output
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let etag = output.e_tag().unwrap_or_default().to_string();
        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| BlobError::new("reading object body failed", e))?
            .into_bytes()
            .to_vec();

        Ok(Some(StoredBlob {
            bytes,
            content_type,
            etag,
        }))
    }
}

// ---------------------------------------------------------------------------
// In-memory implementation (tests)
// ---------------------------------------------------------------------------

/// In-memory blob store for tests. Etags are the SHA-256 hex digest of the
/// stored bytes, mimicking a content-derived entity tag.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, StoredBlob>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), BlobError> {
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let etag = format!("{:x}", hasher.finalize());

        self.blobs.write().await.insert(
            key.to_string(),
            StoredBlob {
                bytes,
                content_type: content_type.to_string(),
                etag,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, BlobError> {
        Ok(self.blobs.read().await.get(key).cloned())
    }
}
