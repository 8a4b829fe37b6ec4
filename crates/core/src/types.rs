/// All persisted records are keyed by a store-assigned UUID.
pub type RecordId = uuid::Uuid;

/// All timestamps are UTC, assigned by the store on insert/update.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
