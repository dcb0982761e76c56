//! Start-time types for meeting records.
//!
//! Upstream call objects carry their start as an optional, loosely formatted
//! string. This module turns that into a [`StartTime`], which keeps the
//! "no time" and "bad time" cases as explicit variants, and a [`SortKey`]
//! used for ordering.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Date-time layouts without an offset. These are read as wall-clock time in
/// the caller's timezone.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    // en-US `toLocaleString()` output.
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y, %I:%M %p",
];

/// The parsed start of a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StartTime {
    /// No start time was provided (absent or blank).
    Unscheduled,
    /// A start time was provided but could not be parsed.
    Invalid(String),
    /// A valid instant, stored in UTC.
    At(DateTime<Utc>),
}

impl StartTime {
    /// Parses a raw start value, reading offset-less values as local time.
    pub fn parse(raw: Option<&str>) -> Self {
        Self::parse_in(raw, &Local)
    }

    /// Parses a raw start value, reading offset-less values in `tz`.
    pub fn parse_in<Tz: TimeZone>(raw: Option<&str>, tz: &Tz) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::Unscheduled;
        };

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Self::At(dt.with_timezone(&Utc));
        }

        // A bare date is midnight UTC, not local midnight.
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return match date.and_hms_opt(0, 0, 0) {
                Some(naive) => Self::At(naive.and_utc()),
                None => Self::Invalid(raw.to_string()),
            };
        }

        for layout in NAIVE_LAYOUTS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
                // Local times that fall in a DST gap have no instant.
                return match tz.from_local_datetime(&naive).earliest() {
                    Some(dt) => Self::At(dt.with_timezone(&Utc)),
                    None => Self::Invalid(raw.to_string()),
                };
            }
        }

        Self::Invalid(raw.to_string())
    }

    /// Returns the instant if this start time is valid.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::At(dt) => Some(dt),
            Self::Unscheduled | Self::Invalid(_) => None,
        }
    }

    /// Returns `true` if this start time holds a valid instant.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::At(_))
    }

    /// Returns the key used to order meetings.
    pub fn sort_key(&self) -> SortKey {
        match self {
            Self::At(dt) => SortKey::At(*dt),
            Self::Unscheduled | Self::Invalid(_) => SortKey::Unknown,
        }
    }

    /// Checks whether this start falls on `date` in the calendar of `tz`.
    ///
    /// Missing and invalid start times are never on any date.
    pub fn is_on_date<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> bool {
        match self {
            Self::At(dt) => dt.with_timezone(tz).date_naive() == date,
            Self::Unscheduled | Self::Invalid(_) => false,
        }
    }
}

/// Effective ordering key of a meeting.
///
/// `Unknown` orders before every valid instant, so meetings without a usable
/// start always come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    /// Absent or unparseable start.
    Unknown,
    /// A valid start instant.
    At(DateTime<Utc>),
}
