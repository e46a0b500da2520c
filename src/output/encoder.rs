use crate::error::Result;
use crate::model::Metric;

pub trait Encoder {
    fn encode(&self, metrics: &Option<Vec<Metric>>) -> Result<Vec<u8>>;
}

/// Encodes one line's outcome as a single JSON document: the metric-tuple
/// list, `[]`, or `null` when the required fields were missing.
pub struct JsonEncoder;

impl JsonEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, metrics: &Option<Vec<Metric>>) -> Result<Vec<u8>> {
        serde_json::to_vec(metrics).map_err(|e| ("couldn't encode metrics", e).into())
    }
}
