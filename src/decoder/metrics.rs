use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;
use crate::model::{
    FieldMap, Metric, Timestamp, FIELD_APPLICATION_TIME, FIELD_RESPONSE_CODE, FIELD_TIMESTAMP,
};
use crate::utils::time::parse_date;

pub const METRIC_4XX: &str = "nginx.net.4xx_status";
pub const METRIC_5XX: &str = "nginx.net.5xx_status";
pub const METRIC_APP_TIME: &str = "nginx.net.app_time";

// Date portion of the access-log timestamp field, e.g. "17/Nov/2014:13:11:26".
const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

lazy_static! {
    static ref STATUS_4XX: Regex = Regex::new("4[0-9]{2}").unwrap();
    static ref STATUS_5XX: Regex = Regex::new("5[0-9]{2}").unwrap();
}

/// Derives the metric tuples for one parsed line.
///
/// Returns `Ok(None)` when `timestamp` or `response_code` is missing (a
/// line lacking them is silently skipped) and `Ok(Some(vec![]))` for a
/// well-formed line that produces no metrics. Emission order is fixed:
/// 4XX counter, 5XX counter, application-time gauge.
pub fn build_metrics(fields: &FieldMap) -> Result<Option<Vec<Metric>>> {
    let log_timestamp = match fields.get(FIELD_TIMESTAMP) {
        Some(value) => value,
        None => return Ok(None),
    };
    let response_code = match fields.get(FIELD_RESPONSE_CODE) {
        Some(value) => value,
        None => return Ok(None),
    };

    // The timezone offset trailing the date portion is deliberately not
    // applied: the date is taken as UTC wall clock so every host derives
    // the same epoch from the same line.
    let timestamp = timestamp_from_field(log_timestamp)?;

    let mut metrics = vec![];

    if STATUS_4XX.is_match(response_code) {
        metrics.push(Metric::counter(METRIC_4XX, timestamp));
    }
    if STATUS_5XX.is_match(response_code) {
        metrics.push(Metric::counter(METRIC_5XX, timestamp));
    }
    if let Some(application_time) = fields.get(FIELD_APPLICATION_TIME) {
        metrics.push(Metric::gauge(METRIC_APP_TIME, timestamp, application_time));
    }

    Ok(Some(metrics))
}

fn timestamp_from_field(value: &str) -> Result<Timestamp> {
    let date = value.split_whitespace().next().unwrap_or(value);
    parse_date(date, Some(TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MetricType, MetricValue};

    const EPOCH: Timestamp = 1416229886; // 17/Nov/2014:13:11:26 UTC

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_build_metrics_4xx_with_app_time() -> Result<()> {
        let metrics = build_metrics(&fields(&[
            ("timestamp", "17/Nov/2014:13:11:26 +0100"),
            ("response_code", "404"),
            ("application_time", "0.640"),
        ]))?
        .unwrap();

        assert_eq!(
            metrics,
            vec![
                Metric::counter(METRIC_4XX, EPOCH),
                Metric::gauge(METRIC_APP_TIME, EPOCH, "0.640"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_build_metrics_2xx_gauge_only() -> Result<()> {
        let metrics = build_metrics(&fields(&[
            ("timestamp", "17/Nov/2014:13:11:26 +0100"),
            ("response_code", "200"),
            ("application_time", "0.640"),
        ]))?
        .unwrap();

        assert_eq!(metrics, vec![Metric::gauge(METRIC_APP_TIME, EPOCH, "0.640")]);
        assert_eq!(metrics[0].metric_type(), MetricType::Gauge);
        assert_eq!(*metrics[0].value(), MetricValue::Time("0.640".into()));
        Ok(())
    }

    #[test]
    fn test_build_metrics_3xx_no_metrics() -> Result<()> {
        let metrics = build_metrics(&fields(&[
            ("timestamp", "18/Nov/2014:18:03:42 +0000"),
            ("response_code", "304"),
        ]))?
        .unwrap();

        assert!(metrics.is_empty());
        Ok(())
    }

    #[test]
    fn test_build_metrics_5xx_counter_only() -> Result<()> {
        let metrics = build_metrics(&fields(&[
            ("timestamp", "17/Nov/2014:13:11:26 +0100"),
            ("response_code", "503"),
        ]))?
        .unwrap();

        assert_eq!(metrics, vec![Metric::counter(METRIC_5XX, EPOCH)]);
        Ok(())
    }

    #[test]
    fn test_build_metrics_not_applicable() -> Result<()> {
        assert!(build_metrics(&FieldMap::new())?.is_none());
        assert!(build_metrics(&fields(&[("response_code", "404")]))?.is_none());
        assert!(build_metrics(&fields(&[(
            "timestamp",
            "17/Nov/2014:13:11:26 +0100"
        )]))?
        .is_none());
        Ok(())
    }

    #[test]
    fn test_build_metrics_status_bands_disjoint() -> Result<()> {
        for code in &["400", "404", "499", "500", "503", "599"] {
            let metrics = build_metrics(&fields(&[
                ("timestamp", "17/Nov/2014:13:11:26 +0100"),
                ("response_code", code),
            ]))?
            .unwrap();

            assert_eq!(metrics.len(), 1, "{}", code);
        }
        Ok(())
    }

    #[test]
    fn test_build_metrics_bad_timestamp_propagates() {
        let err = build_metrics(&fields(&[
            ("timestamp", "garbage"),
            ("response_code", "404"),
        ]))
        .unwrap_err();

        assert_eq!(err.value(), Some("garbage"));
    }
}
