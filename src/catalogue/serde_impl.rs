//! Date handling for catalogue records
//!
//! Item dates arrive as ISO strings. Both plain dates ("2025-03-15") and
//! timestamps ("2025-03-15T18:30:00Z", "2025-03-15T18:30:00") are accepted;
//! only the calendar date is kept.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de};

/// Parse an ISO date or timestamp into a calendar date
///
/// # Arguments
/// * `value` - Date string from the catalogue source
///
/// # Returns
/// The calendar date, or an error message describing the accepted formats
pub fn parse_item_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(local.date());
    }

    Err(format!(
        "Invalid date '{}'. Use YYYY-MM-DD (e.g., '2025-03-15') or an RFC 3339 timestamp",
        value
    ))
}

/// Deserialize an optional item date; `null` and missing both mean "no date"
pub(crate) fn deserialize_item_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) => parse_item_date(&value).map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_item_date("2025-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_timestamps_keep_calendar_date() {
        let expected = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
        assert_eq!(parse_item_date("2025-10-02T18:30:00Z").unwrap(), expected);
        assert_eq!(parse_item_date("2025-10-02T18:30:00+01:00").unwrap(), expected);
        assert_eq!(parse_item_date("2025-10-02T18:30:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(parse_item_date("15/03/2025").is_err());
        assert!(parse_item_date("2025-13-01").is_err());
        assert!(parse_item_date("").is_err());
    }
}
