//! Record identifier generation.
//!
//! Identifiers are a time-plus-random composite: the current epoch
//! millisecond count followed by a zero-padded random salt. Collisions
//! require two generators to draw the same salt within the same
//! millisecond -- unlikely, not impossible.

use rand::Rng;

use crate::types::RecordId;

/// Generate a fresh opaque record id.
pub fn generate_record_id() -> RecordId {
    let millis = chrono::Utc::now().timestamp_millis();
    let salt: u32 = rand::rng().random_range(0..10_000);
    format!("{millis}{salt:04}")
}
