/// All primary keys are opaque app-generated strings (see [`crate::ident`]).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
