pub mod encoder;
pub mod writer;

use crate::error::Result;
use crate::model::Metric;

pub struct Output {
    writer: Box<dyn writer::Writer>,
    encoder: Box<dyn encoder::Encoder>,
}

impl Output {
    pub fn new(writer: Box<dyn writer::Writer>, encoder: Box<dyn encoder::Encoder>) -> Self {
        Self { writer, encoder }
    }

    pub fn write(&mut self, metrics: &Option<Vec<Metric>>) -> Result<()> {
        let buf = self.encoder.encode(metrics)?;
        self.writer
            .write(&buf)
            .map_err(|e| ("writer failed", e).into())
    }
}
