//! Date and timestamp parsing and rendering.
//!
//! Payloads may carry dates either in the plain `YYYY-MM-DD` form or as full timestamps, and
//! timestamps may use a space or `T` separator with an optional UTC offset. Projections
//! always render the canonical forms below.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Canonical rendering of calendar dates, e.g. `1990-04-12`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical rendering of timestamps, e.g. `2026-03-01 09:30:00`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ACCEPTED_DATE_TIME_FORMATS: [&str; 4] = [
    DATE_TIME_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose date part is used.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()))
}

/// Parses a timestamp.
///
/// Accepts the canonical format and its `T` separated variant, with or without seconds,
/// RFC 3339 timestamps (converted to UTC), and bare dates (taken as midnight).
pub fn parse_date_time(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();

    ACCEPTED_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.naive_utc()))
        .or_else(|| {
            NaiveDate::parse_from_str(input, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Renders a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Renders a timestamp as `YYYY-MM-DD HH:MM:SS`
pub fn format_date_time(date_time: NaiveDateTime) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}
