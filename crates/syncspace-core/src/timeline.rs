//! Upcoming-meeting selection and countdown computation.
//!
//! The functions here are pure views over a slice of [`MeetingRecord`]s:
//! - [`sort_upcoming`] orders meetings by effective start time
//! - [`select_nearest`] picks the first meeting of a sorted slice
//! - [`filter_today`] keeps the (at most two) meetings on a given day
//! - [`compute_countdown`] turns the nearest start into a [`Countdown`]
//!
//! [`CountdownState`] holds the last displayed countdown so that a bad start
//! time freezes the display instead of clearing it.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::meeting::MeetingRecord;
use crate::time::StartTime;

/// Maximum number of meetings listed for today.
pub const TODAY_LIMIT: usize = 2;

/// Display text when there is no meeting to count down to.
pub const NO_MEETING_TEXT: &str = "No Upcoming Meeting";

/// Display text once the target meeting's start has passed.
pub const STARTED_TEXT: &str = "Meeting started";

/// Sorts meetings ascending by effective start time.
///
/// Offset-less start values are read as local time. See [`sort_upcoming_in`].
pub fn sort_upcoming(meetings: &[MeetingRecord]) -> Vec<MeetingRecord> {
    sort_upcoming_in(meetings, &Local)
}

/// Sorts meetings ascending by effective start time, reading offset-less
/// start values in `tz`.
///
/// Meetings without a usable start come first. The sort is stable, so equal
/// keys keep their input order. The input is left untouched.
pub fn sort_upcoming_in<Tz: TimeZone>(meetings: &[MeetingRecord], tz: &Tz) -> Vec<MeetingRecord> {
    let mut keyed: Vec<_> = meetings
        .iter()
        .map(|m| (m.start_time_in(tz).sort_key(), m))
        .collect();
    keyed.sort_by_key(|(key, _)| *key);

    debug!(count = keyed.len(), "Sorted upcoming meetings");
    keyed.into_iter().map(|(_, m)| m.clone()).collect()
}

/// Returns the nearest meeting: the first of an already sorted slice.
///
/// Past meetings are not skipped.
pub fn select_nearest(sorted: &[MeetingRecord]) -> Option<&MeetingRecord> {
    sorted.first()
}

/// Keeps the first [`TODAY_LIMIT`] meetings whose start falls on `today` in
/// the calendar of `tz`.
pub fn filter_today<Tz: TimeZone>(
    sorted: &[MeetingRecord],
    today: NaiveDate,
    tz: &Tz,
) -> Vec<MeetingRecord> {
    filter_today_with_limit(sorted, today, tz, TODAY_LIMIT)
}

/// Like [`filter_today`] with an explicit cap.
///
/// Missing or invalid start times are never "today".
pub fn filter_today_with_limit<Tz: TimeZone>(
    sorted: &[MeetingRecord],
    today: NaiveDate,
    tz: &Tz,
    limit: usize,
) -> Vec<MeetingRecord> {
    let todays: Vec<_> = sorted
        .iter()
        .filter(|m| m.start_time_in(tz).is_on_date(today, tz))
        .take(limit)
        .cloned()
        .collect();

    debug!(%today, count = todays.len(), limit, "Filtered today's meetings");
    todays
}

/// [`filter_today`] for the local calendar day containing `now`.
pub fn filter_today_local(sorted: &[MeetingRecord], now: DateTime<Utc>) -> Vec<MeetingRecord> {
    let today = now.with_timezone(&Local).date_naive();
    filter_today(sorted, today, &Local)
}

/// What the countdown should currently display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Countdown {
    /// There is no target meeting.
    NoMeeting,
    /// The target meeting's start is now or in the past.
    Started,
    /// Whole hours, minutes and seconds left until the start.
    Remaining {
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
}

impl Countdown {
    /// Splits a non-negative number of whole seconds into hours, minutes and
    /// seconds.
    pub fn remaining(total_seconds: i64) -> Self {
        let total = total_seconds.max(0);
        Self::Remaining {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMeeting => f.write_str(NO_MEETING_TEXT),
            Self::Started => f.write_str(STARTED_TEXT),
            Self::Remaining {
                hours,
                minutes,
                seconds,
            } => write!(f, "{hours}h {minutes}m {seconds}s"),
        }
    }
}

/// Computes the countdown to `target` at `now`.
///
/// Returns `None` when the target's start is missing or unparseable. A
/// diagnostic is logged and the caller should keep its previous display.
pub fn compute_countdown(target: Option<&MeetingRecord>, now: DateTime<Utc>) -> Option<Countdown> {
    compute_countdown_in(target, now, &Local)
}

/// Like [`compute_countdown`], reading offset-less start values in `tz`.
pub fn compute_countdown_in<Tz: TimeZone>(
    target: Option<&MeetingRecord>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Option<Countdown> {
    let Some(target) = target else {
        return Some(Countdown::NoMeeting);
    };

    let start = match target.start_time_in(tz) {
        StartTime::At(dt) => dt,
        StartTime::Unscheduled => {
            warn!(meeting_id = %target.id, "Meeting start time is undefined");
            return None;
        }
        StartTime::Invalid(raw) => {
            warn!(meeting_id = %target.id, raw = %raw, "Invalid date format for meeting start time");
            return None;
        }
    };

    // Sub-second remainders still count as "not started yet".
    let diff_ms = (start - now).num_milliseconds();
    if diff_ms <= 0 {
        return Some(Countdown::Started);
    }
    Some(Countdown::remaining(diff_ms / 1000))
}

/// The countdown as last shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownState {
    /// The meeting being counted down to.
    pub target_meeting_id: Option<String>,
    /// The text currently on display.
    pub display_text: String,
}

impl Default for CountdownState {
    fn default() -> Self {
        Self {
            target_meeting_id: None,
            display_text: NO_MEETING_TEXT.to_string(),
        }
    }
}

impl CountdownState {
    /// Creates an idle state showing the "no meeting" text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the display for `target` at `now`.
    ///
    /// Returns `true` if the target id or the display text changed. When the
    /// target's start is missing or invalid the previous text is kept.
    pub fn apply(&mut self, target: Option<&MeetingRecord>, now: DateTime<Utc>) -> bool {
        self.apply_in(target, now, &Local)
    }

    /// Like [`CountdownState::apply`], reading offset-less values in `tz`.
    pub fn apply_in<Tz: TimeZone>(
        &mut self,
        target: Option<&MeetingRecord>,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> bool {
        let id = target.map(|m| m.id.clone());
        let id_changed = self.target_meeting_id != id;
        self.target_meeting_id = id;

        let Some(countdown) = compute_countdown_in(target, now, tz) else {
            return id_changed;
        };
        let text = countdown.to_string();
        if text == self.display_text {
            return id_changed;
        }
        self.display_text = text;
        true
    }
}
