//! Normalization of the date representations found in stored documents.
//!
//! Suggested dates and created/updated timestamps arrive in several shapes:
//! native datetimes, `YYYY-MM-DD` strings, other ISO-like strings, or
//! structured `{seconds, nanoseconds}` timestamp records. Everything funnels
//! through [`to_utc_datetime`]; inputs that cannot be read as a valid
//! calendar date come back as `None`, never as a panic or error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::Deserialize;

/// A date field as it appears in a document, before normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Native(DateTime<Utc>),
    Timestamp { seconds: i64, nanoseconds: u32 },
    Text(String),
}

/// Canonical `YYYY-MM-DD` form, anchored to UTC so the calendar date never
/// shifts with the local timezone offset.
pub fn to_suggested_date(value: &DateValue) -> Option<NaiveDate> {
    to_utc_datetime(value).map(|dt| dt.naive_utc().date())
}

/// Full ISO 8601 string for created_at/updated_at style fields.
pub fn to_iso_string(value: &DateValue) -> Option<String> {
    to_utc_datetime(value).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn to_canonical_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn to_utc_datetime(value: &DateValue) -> Option<DateTime<Utc>> {
    match value {
        DateValue::Native(dt) => Some(*dt),
        // Firestore-style record: seconds * 1000 ms since epoch, the
        // nanoseconds part is ignored.
        DateValue::Timestamp { seconds, .. } => {
            let millis = seconds.checked_mul(1000)?;
            match Utc.timestamp_millis_opt(millis) {
                chrono::LocalResult::Single(dt) => Some(dt),
                _ => None,
            }
        }
        DateValue::Text(s) => parse_text(s),
    }
}

fn parse_text(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if is_plain_date(s) {
        // Anchor to midnight UTC before extracting year/month/day.
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    None
}

/// Matches the `^\d{4}-\d{2}-\d{2}$` shape without deciding validity, that
/// is the parser's job ("2024-13-40" has the shape but is not a date).
fn is_plain_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}
