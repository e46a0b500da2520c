use lazy_static::lazy_static;
use regex::Regex;

use crate::model::{FieldMap, FIELD_PATH, FIELD_QUERY};

// nginx.conf:
//
//   log_format timed_combined
//       '$remote_addr - $remote_user [$time_local] '
//       '"$request" $status $body_bytes_sent '
//       '"$http_referer" "$http_user_agent" '
//       '$request_time $upstream_response_time $pipe';
lazy_static! {
    static ref TIMED_COMBINED: Regex = Regex::new(
        r#"(?P<ip_address>\S*)\s-\s(?P<requesting_user>\S*)\s\[(?P<timestamp>.*?)\]\s{1,2}"(?P<method>\S*)\s*(?P<request>\S*)\s*(HTTP/)*(?P<http_version>.*?)"\s(?P<response_code>\d{3})\s(?P<size>\S*)\s"(?P<referrer>[^"]*)"\s"(?P<client>[^"]*)"\s(?P<service_time>\S*)\s(?P<application_time>\S*)\s(?P<pipe>\S*)"#
    )
    .unwrap();
}

const PLACEHOLDER: &str = "-";

/// Extracts the named fields of one `timed_combined` access-log line.
///
/// A line that doesn't match the pattern yields an empty map, never an
/// error. Captures that are empty or the `-` placeholder are omitted. The
/// `request` capture is stored as `path`, split at the first `?` into
/// `path` and `query` when the target carries a query string.
pub fn parse_line(line: &str) -> FieldMap {
    let mut fields = FieldMap::new();

    let caps = match TIMED_COMBINED.captures(line) {
        Some(caps) => caps,
        None => return fields,
    };

    for name in TIMED_COMBINED.capture_names().flatten() {
        let value = match caps.name(name) {
            Some(m) if !m.as_str().is_empty() && m.as_str() != PLACEHOLDER => m.as_str(),
            _ => continue,
        };

        if name == "request" {
            match value.find('?') {
                Some(pos) => {
                    fields.insert(FIELD_PATH.to_string(), value[..pos].to_string());
                    fields.insert(FIELD_QUERY.to_string(), value[pos + 1..].to_string());
                }
                None => {
                    fields.insert(FIELD_PATH.to_string(), value.to_string());
                }
            }
            continue;
        }

        fields.insert(name.to_string(), value.to_string());
    }

    fields
}
