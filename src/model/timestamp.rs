// Unix timestamp in seconds, UTC.
pub type Timestamp = i64;
