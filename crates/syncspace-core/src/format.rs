//! Display formatting for meeting times and join links.
//!
//! All strings follow the en-US browser locale the dashboard was designed
//! around, e.g. `March 15, 2024 - 10:00 AM`.

use chrono::{DateTime, Local, TimeZone, Utc};
use url::Url;

use crate::time::StartTime;

/// What the browser prints for an unparseable date.
pub const INVALID_DATE_TEXT: &str = "Invalid Date";

/// Formats a raw date string as `"<Month> <Day>, <Year> - <hh>:<mm> <AM|PM>"`
/// in local time.
///
/// Returns an empty string for absent or empty input.
pub fn format_date_time(input: Option<&str>) -> String {
    format_date_time_in(input, &Local)
}

/// Like [`format_date_time`], reading and printing in `tz`.
pub fn format_date_time_in<Tz: TimeZone>(input: Option<&str>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    // An all-whitespace string is present, so it is not treated as absent.
    let Some(input) = input.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    match StartTime::parse_in(Some(input), tz) {
        StartTime::At(dt) => format!("{} - {}", format_date(&dt, tz), format_clock_time(&dt, tz)),
        StartTime::Unscheduled | StartTime::Invalid(_) => {
            format!("{INVALID_DATE_TEXT} - {INVALID_DATE_TEXT}")
        }
    }
}

/// `March 15, 2024`
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format("%B %-d, %Y").to_string()
}

/// `Friday, March 15, 2024`
pub fn format_long_date<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format("%A, %B %-d, %Y").to_string()
}

/// Two-digit 12-hour clock: `03:05 PM`.
pub fn format_clock_time<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format("%I:%M %p").to_string()
}

/// Routing path of a meeting room: `/meeting/<id>`.
///
/// The id is inserted as-is.
pub fn meeting_path(id: &str) -> String {
    format!("/meeting/{id}")
}

/// Absolute, shareable link to a meeting room under `base`.
///
/// Path segments already present in `base` are kept, and the id is
/// percent-encoded as a single segment. Returns `None` if `base` cannot carry
/// a path (e.g. a `mailto:` URL).
pub fn meeting_link(base: &Url, id: &str) -> Option<Url> {
    let mut link = base.clone();
    link.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push("meeting")
        .push(id);
    Some(link)
}
