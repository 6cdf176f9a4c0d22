//! Normalization applied before comparing search criteria

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Canonical calendar date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Trim surrounding whitespace and lower-case
#[must_use]
pub fn normalize_name(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Parse a date or ISO-8601 timestamp into its calendar date
///
/// The date is taken as written: an offset never shifts the day.
#[must_use]
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

/// Reduce a date or timestamp to `yyyy-mm-dd`, or `""` when it does not parse
#[must_use]
pub fn normalize_date(value: &str) -> String {
    parse_calendar_date(value)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}
