mod access_log;
mod metrics;

pub use access_log::*;
pub use metrics::*;

use tracing::debug;

use crate::error::Result;
use crate::model::Metric;

/// Entry point called once per newly appended log line: extract the fields,
/// then derive the metric tuples. `Ok(None)` means the line is missing the
/// required fields and carries nothing to emit.
pub fn parse(line: &str) -> Result<Option<Vec<Metric>>> {
    let fields = parse_line(line);
    debug!(?fields, "parsed access-log line");
    build_metrics(&fields)
}
