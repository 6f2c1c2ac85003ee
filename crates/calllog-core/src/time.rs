use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, Utc};
use thiserror::Error;

pub const DAY_LABEL_FORMAT: &str = "%b %-d";
pub const TIMESTAMP_FORMAT: &str = "%b %-d, %Y %H:%M";
pub const UNKNOWN_DATE_LABEL: &str = "Unknown date";

// Naive inputs are read as UTC.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("timestamp cannot be empty")]
    Empty,
    #[error("invalid timestamp: {0}")]
    InvalidDateTime(String),
}

pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Zone labels and timestamps are rendered in. `Local` resolves the
/// offset at each instant rather than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    Local,
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn utc() -> Self {
        DisplayZone::Fixed(utc_offset())
    }
}

pub fn parse_created_at(input: &str) -> Result<DateTime<Utc>, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(TimeParseError::InvalidDateTime(trimmed.to_string()))
}

/// Lenient variant used by the view pipeline: absent and malformed values
/// both collapse to `None`.
pub fn created_at_instant(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|value| parse_created_at(value).ok())
}

pub fn format_day_label(instant: Option<DateTime<Utc>>, zone: DisplayZone) -> String {
    format_with(instant, zone, DAY_LABEL_FORMAT)
}

pub fn format_timestamp(instant: Option<DateTime<Utc>>, zone: DisplayZone) -> String {
    format_with(instant, zone, TIMESTAMP_FORMAT)
}

fn format_with(instant: Option<DateTime<Utc>>, zone: DisplayZone, fmt: &str) -> String {
    let Some(dt) = instant else {
        return UNKNOWN_DATE_LABEL.to_string();
    };
    match zone {
        DisplayZone::Local => dt.with_timezone(&Local).format(fmt).to_string(),
        DisplayZone::Fixed(offset) => dt.with_timezone(&offset).format(fmt).to_string(),
    }
}
