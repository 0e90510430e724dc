use crate::auth::jwt::AuthConfig;

/// Blob storage configuration.
#[derive(Debug, Clone)]
pub struct BlobConfig {
    /// Bucket holding uploaded product images.
    pub bucket: String,
    /// Optional endpoint override for S3-compatible stores (R2, MinIO).
    pub endpoint: Option<String>,
}

impl BlobConfig {
    /// Load blob storage configuration from environment variables.
    ///
    /// | Env Var         | Required | Default |
    /// |-----------------|----------|---------|
    /// | `BLOB_BUCKET`   | **yes**  | --      |
    /// | `BLOB_ENDPOINT` | no       | --      |
    ///
    /// # Panics
    ///
    /// Panics if `BLOB_BUCKET` is not set.
    pub fn from_env() -> Self {
        let bucket =
            std::env::var("BLOB_BUCKET").expect("BLOB_BUCKET must be set in the environment");
        let endpoint = std::env::var("BLOB_ENDPOINT").ok();
        Self { bucket, endpoint }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Token signing and expiry configuration.
    pub auth: AuthConfig,
    /// Blob storage configuration.
    pub blob: BlobConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            auth: AuthConfig::from_env(),
            blob: BlobConfig::from_env(),
        }
    }
}
