//! Timestamp parsing and formatting.
//!
//! Observation exports in the wild carry a mix of RFC 3339 timestamps and
//! naive `YYYY-MM-DD HH:MM:SS[.fff]` strings. Naive timestamps are assumed
//! to be UTC.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Naive formats accepted in addition to RFC 3339.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp string into a UTC datetime.
///
/// Returns `None` if the value matches none of the accepted formats.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    None
}

/// Format a UTC datetime as an ISO 8601 string with a `Z` designator.
pub fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339_utc() {
        let dt = parse_timestamp("2024-10-24T23:03:13Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 10, 24, 23, 3, 13).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_offset_normalized_to_utc() {
        let dt = parse_timestamp("2024-10-24T23:03:13+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 10, 24, 21, 3, 13).unwrap());
    }

    #[test]
    fn test_parse_naive_space_separated() {
        let dt = parse_timestamp("2024-01-12 06:03:50").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 12, 6, 3, 50).unwrap());
    }

    #[test]
    fn test_parse_naive_with_fractional_seconds() {
        let dt = parse_timestamp("2024-10-24 23:03:13.917000").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 917);
    }

    #[test]
    fn test_parse_naive_t_separated() {
        assert!(parse_timestamp("2024-01-12T06:03:50").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("not-a-date").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("2024-13-01 00:00:00").is_none());
    }

    #[test]
    fn test_format_utc_round_trip() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
        let formatted = format_utc(dt);
        assert_eq!(formatted, "2024-06-15T12:30:00Z");
        assert_eq!(parse_timestamp(&formatted).unwrap(), dt);
    }
}
