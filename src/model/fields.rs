use std::collections::HashMap;

pub type FieldName = String;
pub type FieldValue = String;

/// Fields extracted from one access-log line. A key is present only if its
/// captured value was non-empty and not the `-` placeholder.
pub type FieldMap = HashMap<FieldName, FieldValue>;

pub const FIELD_TIMESTAMP: &str = "timestamp";
pub const FIELD_RESPONSE_CODE: &str = "response_code";
pub const FIELD_APPLICATION_TIME: &str = "application_time";
pub const FIELD_PATH: &str = "path";
pub const FIELD_QUERY: &str = "query";
