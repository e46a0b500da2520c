use std::collections::HashMap;

use serde::ser::{Serialize, SerializeTuple, Serializer};

use super::timestamp::Timestamp;

pub type MetricName = String;

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Counter,
    Gauge,
}

/// Counters carry a plain number; gauges keep the source log's literal
/// string representation (e.g. "0.640") untouched.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(i64),
    Time(String),
}

/// One metric emission record. On the wire it is the four-element tuple
/// `[name, timestamp, value, {"metric_type": "counter"|"gauge"}]` expected
/// by the consuming metrics pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    name: MetricName,
    timestamp: Timestamp,
    value: MetricValue,
    metric_type: MetricType,
}

impl Metric {
    pub fn counter(name: &str, timestamp: Timestamp) -> Self {
        Self {
            name: name.into(),
            timestamp,
            value: MetricValue::Count(1),
            metric_type: MetricType::Counter,
        }
    }

    pub fn gauge(name: &str, timestamp: Timestamp, value: &str) -> Self {
        Self {
            name: name.into(),
            timestamp,
            value: MetricValue::Time(value.into()),
            metric_type: MetricType::Gauge,
        }
    }

    #[inline]
    pub fn name(&self) -> &MetricName {
        &self.name
    }

    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    #[inline]
    pub fn value(&self) -> &MetricValue {
        &self.value
    }

    #[inline]
    pub fn metric_type(&self) -> MetricType {
        self.metric_type
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut metadata = HashMap::with_capacity(1);
        metadata.insert("metric_type", self.metric_type);

        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&self.name)?;
        tuple.serialize_element(&self.timestamp)?;
        tuple.serialize_element(&self.value)?;
        tuple.serialize_element(&metadata)?;
        tuple.end()
    }
}
