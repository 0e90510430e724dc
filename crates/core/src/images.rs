//! Blob key generation for uploaded images.

/// Build the blob-store key for an uploaded file:
/// `<upload-epoch-millis>-<original-filename>`.
///
/// There is no collision handling beyond timestamp granularity: two uploads
/// of the same filename within one millisecond share a key and the later
/// write wins.
pub fn generate_blob_key(filename: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    format!("{millis}-{filename}")
}
