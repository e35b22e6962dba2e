use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::DateError;

const DISPLAY_FORMAT: &str = "%Y-%m-%d";
const OFFSET_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMATS: [&str; 2] = [DISPLAY_FORMAT, "%Y%m%d"];

/// Parse an ISO-8601 date or timestamp. Timestamps keep their own offset.
pub fn parse_event_date(raw: &str) -> Result<NaiveDate, DateError> {
    let normalized = expand_utc_designator(raw);

    parse_rfc3339(&normalized)
        .or_else(|| parse_offset_datetime(&normalized))
        .or_else(|| parse_naive_datetime(raw))
        .or_else(|| parse_plain_date(raw))
        .ok_or_else(|| DateError::Malformed(raw.to_string()))
}

/// `YYYY-MM-DD` for well-formed input, `N/A` for empty input, and the
/// raw text for anything else.
pub fn format_event_date(raw: &str) -> String {
    if raw.is_empty() {
        return "N/A".to_string();
    }

    match parse_event_date(raw) {
        Ok(date) => date.format(DISPLAY_FORMAT).to_string(),
        Err(e) => {
            log::debug!("{}, showing it as-is", e);
            raw.to_string()
        }
    }
}

/// Cut to at most `width` characters
pub fn truncate_display(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// `%z` does not read a trailing `Z`, so spell it as `+00:00`.
fn expand_utc_designator(raw: &str) -> Cow<'_, str> {
    match raw.strip_suffix('Z') {
        Some(rest) if !rest.is_empty() => Cow::Owned(format!("{}+00:00", rest)),
        _ => Cow::Borrowed(raw),
    }
}

fn parse_rfc3339(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

fn parse_offset_datetime(raw: &str) -> Option<NaiveDate> {
    OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.date_naive())
}

fn parse_naive_datetime(raw: &str) -> Option<NaiveDate> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.date())
}

fn parse_plain_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
