/// All entity identifiers are UUIDs, matching the ids issued by the
/// managed auth vendor.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
