use std::sync::Arc;

use storekeep_blob::BlobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: storekeep_db::DbPool,
    /// Server configuration (signing secret, TTLs, CORS).
    pub config: Arc<ServerConfig>,
    /// Blob store for uploaded images.
    pub blob: Arc<dyn BlobStore>,
}
