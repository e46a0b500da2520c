use chrono::prelude::*;

use crate::error::{Error, Result};
use crate::model::Timestamp;

// Formats tried, in order, when the caller doesn't supply one. The second
// form covers log timestamps with a comma-separated fractional-seconds
// suffix (e.g. "2021-01-01 00:00:00,123").
const FALLBACK_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S,%f"];

/// Converts a textual date into Unix epoch seconds, either strictly with the
/// caller-supplied format or by trying `FALLBACK_FORMATS` in order.
///
/// The value is always interpreted as UTC wall clock. A timezone offset in
/// the value is accepted by chrono but never applied, so the conversion is
/// deterministic across hosts.
pub fn parse_date(value: &str, format: Option<&str>) -> Result<Timestamp> {
    if let Some(format) = format {
        return match NaiveDateTime::parse_from_str(value, format) {
            Ok(dt) => Ok(dt.and_utc().timestamp()),
            Err(_) => Err(Error::parse(value)),
        };
    }

    for format in &FALLBACK_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt.and_utc().timestamp());
        }
    }

    Err(Error::parse(value))
}

/// Parses a bracketed access-log date like `[05/Dec/2006:10:51:44 +0000]`
/// (square brackets included) by fixed character offsets and returns a
/// `YYYYMMDDHH24MISS` string together with the timezone offset as-is:
///
/// ```
/// # use ngxmetrics::utils::time::parse_bracketed_date;
/// let (ts, tz) = parse_bracketed_date("[05/Dec/2006:10:51:44 +0000]").unwrap();
/// assert_eq!(ts, "20061205105144");
/// assert_eq!(tz, "+0000");
/// ```
///
/// It does not attempt to adjust the timestamp according to the timezone;
/// that is the caller's problem.
pub fn parse_bracketed_date(value: &str) -> Result<(String, String)> {
    const MONTHS: [(&str, &str); 12] = [
        ("Jan", "01"),
        ("Feb", "02"),
        ("Mar", "03"),
        ("Apr", "04"),
        ("May", "05"),
        ("Jun", "06"),
        ("Jul", "07"),
        ("Aug", "08"),
        ("Sep", "09"),
        ("Oct", "10"),
        ("Nov", "11"),
        ("Dec", "12"),
    ];

    if !value.is_ascii() || !value.starts_with('[') || !value.ends_with(']') {
        return Err(Error::parse(value));
    }

    let date = &value[1..value.len() - 1];
    if date.len() < 21 {
        return Err(Error::parse(value));
    }

    let abbr = &date[3..6];
    let month = MONTHS
        .iter()
        .find(|(name, _)| *name == abbr)
        .map(|(_, num)| *num)
        .ok_or_else(|| Error::unknown_month(abbr))?;

    let timestamp = [
        &date[7..11],  // year
        month,
        &date[0..2],   // day
        &date[12..14], // hour
        &date[15..17], // minute
        &date[18..20], // second
    ]
    .concat();

    Ok((timestamp, date[21..].trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_with_format() -> std::result::Result<(), String> {
        let ts = parse_date("17/Nov/2014:13:11:26", Some("%d/%b/%Y:%H:%M:%S"))?;
        assert_eq!(ts, 1416229886);
        Ok(())
    }

    #[test]
    fn test_parse_date_with_format_mismatch() {
        let err = parse_date("not a date", Some("%d/%b/%Y:%H:%M:%S")).unwrap_err();
        assert_eq!(err.value(), Some("not a date"));
    }

    #[test]
    fn test_parse_date_fallback_formats() -> std::result::Result<(), String> {
        assert_eq!(parse_date("2021-01-01 00:00:00", None)?, 1609459200);
        assert_eq!(parse_date("2021-01-01 00:00:00,123", None)?, 1609459200);
        Ok(())
    }

    #[test]
    fn test_parse_date_no_fallback_matches() {
        let err = parse_date("01/Jan/2021:00:00:00", None).unwrap_err();
        assert_eq!(err.value(), Some("01/Jan/2021:00:00:00"));
    }

    #[test]
    fn test_parse_bracketed_date() -> std::result::Result<(), String> {
        let (ts, tz) = parse_bracketed_date("[05/Dec/2006:10:51:44 +0000]")?;
        assert_eq!(ts, "20061205105144");
        assert_eq!(tz, "+0000");

        let (ts, tz) = parse_bracketed_date("[17/Nov/2014:13:11:26 +0100]")?;
        assert_eq!(ts, "20141117131126");
        assert_eq!(tz, "+0100");

        Ok(())
    }

    #[test]
    fn test_parse_bracketed_date_unknown_month() {
        let err = parse_bracketed_date("[05/Foo/2006:10:51:44 +0000]").unwrap_err();
        assert_eq!(err.value(), Some("Foo"));
    }

    #[test]
    fn test_parse_bracketed_date_malformed() {
        for value in &["", "05/Dec/2006:10:51:44 +0000", "[05/Dec/20]", "[не дата +0000]"] {
            assert!(parse_bracketed_date(value).is_err(), "{}", value);
        }
    }
}
