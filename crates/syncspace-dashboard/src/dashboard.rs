//! Home dashboard composition.
//!
//! [`Dashboard`] keeps the latest answer from the [`CallSource`] and derives
//! the home page view from it: the hero banner for the nearest meeting and
//! the cards for today's meetings.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;
use syncspace_core::{
    MeetingRecord, NO_MEETING_TEXT, StartTime, filter_today_with_limit, format_clock_time,
    format_date_time_in, format_long_date, meeting_link, select_nearest, sort_upcoming_in,
};
use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::error::DashboardResult;
use crate::source::{CallSource, CallsState};

/// Hero time text when nothing is scheduled.
pub const SCHEDULE_PROMPT_TEXT: &str = "Schedule a meeting";

/// Hero date text when nothing is scheduled.
pub const EXPLORE_TEXT: &str = "Explore seamless experience";

/// Shown instead of cards when nothing is on today.
pub const NO_MEETING_TODAY_TEXT: &str = "No Upcoming Meeting found Today's";

/// Label of the card action button.
pub const START_BUTTON_TEXT: &str = "Start";

/// The banner describing the nearest meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroBanner {
    /// `Upcoming Meeting at 03:05 PM`, or the "no meeting" text.
    pub heading: String,
    /// Large clock time of the nearest meeting.
    pub time: String,
    /// Long date of the nearest meeting.
    pub date: String,
}

impl HeroBanner {
    fn empty() -> Self {
        Self {
            heading: NO_MEETING_TEXT.to_string(),
            time: SCHEDULE_PROMPT_TEXT.to_string(),
            date: EXPLORE_TEXT.to_string(),
        }
    }

    fn for_meeting<Tz: TimeZone>(meeting: &MeetingRecord, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        match meeting.start_time_in(tz) {
            StartTime::At(start) => {
                let time = format_clock_time(&start, tz);
                Self {
                    heading: format!("Upcoming Meeting at {time}"),
                    time,
                    date: format_long_date(&start, tz),
                }
            }
            StartTime::Unscheduled | StartTime::Invalid(_) => Self {
                heading: "Upcoming Meeting".to_string(),
                time: String::new(),
                date: String::new(),
            },
        }
    }
}

/// A card for one of today's meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingCard {
    /// Call id.
    pub id: String,
    /// Meeting description, used as the card title.
    pub title: Option<String>,
    /// `March 15, 2024 - 10:00 AM`
    pub date: String,
    /// Shareable link to the meeting room.
    pub link: Option<String>,
    /// Routing path opened by the start button.
    pub path: String,
    /// Label of the start button.
    pub button_text: String,
}

impl MeetingCard {
    fn new<Tz: TimeZone>(meeting: &MeetingRecord, config: &DashboardConfig, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: meeting.id.clone(),
            title: meeting.description.clone(),
            date: format_date_time_in(meeting.starts_at.as_deref(), tz),
            link: meeting_link(&config.base_url, &meeting.id).map(String::from),
            path: meeting.path(),
            button_text: START_BUTTON_TEXT.to_string(),
        }
    }
}

/// Everything the home page shows, derived at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// The source has not answered yet. Nothing else is filled in.
    pub loading: bool,
    /// Number of known upcoming calls.
    pub upcoming_count: usize,
    /// The nearest meeting.
    pub nearest: Option<MeetingRecord>,
    /// Hero banner, absent while loading.
    pub hero: Option<HeroBanner>,
    /// Cards for today's meetings.
    pub today: Vec<MeetingCard>,
    /// Placeholder shown when `today` is empty.
    pub empty_today_text: Option<String>,
}

impl DashboardView {
    fn loading() -> Self {
        Self {
            loading: true,
            upcoming_count: 0,
            nearest: None,
            hero: None,
            today: Vec::new(),
            empty_today_text: None,
        }
    }
}

/// Holds the latest call list and derives views from it.
pub struct Dashboard {
    config: DashboardConfig,
    source: Arc<dyn CallSource>,
    calls: CallsState,
}

impl Dashboard {
    /// Creates a dashboard in the loading state.
    pub fn new(config: DashboardConfig, source: Arc<dyn CallSource>) -> Self {
        Self {
            config,
            source,
            calls: CallsState::Loading,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Returns `true` until the first successful fetch.
    pub fn is_loading(&self) -> bool {
        self.calls.is_loading()
    }

    /// The raw calls from the last fetch.
    pub fn calls(&self) -> &[MeetingRecord] {
        self.calls.calls()
    }

    /// Fetches calls from the source.
    ///
    /// On failure the previous call list is kept.
    pub async fn refresh(&mut self) -> DashboardResult<()> {
        match self.source.fetch_upcoming().await {
            Ok(calls) => {
                debug!(source = self.source.name(), count = calls.len(), "Fetched calls");
                self.set_calls(Some(calls));
                Ok(())
            }
            Err(e) => {
                warn!(source = self.source.name(), error = %e, "Failed to fetch calls");
                Err(e.into())
            }
        }
    }

    /// Replaces the known calls. `None` counts as an empty list.
    pub fn set_calls(&mut self, calls: Option<Vec<MeetingRecord>>) {
        self.calls = CallsState::Ready(calls.unwrap_or_default());
    }

    /// The known calls, sorted with local-time parsing.
    pub fn upcoming(&self) -> Vec<MeetingRecord> {
        sort_upcoming_in(self.calls.calls(), &Local)
    }

    /// The nearest meeting, with local-time parsing.
    pub fn nearest(&self) -> Option<MeetingRecord> {
        select_nearest(&self.upcoming()).cloned()
    }

    /// Builds the view at `now` in local time.
    pub fn view(&self, now: DateTime<Utc>) -> DashboardView {
        self.view_in(now, &Local)
    }

    /// Builds the view at `now` in the calendar of `tz`.
    pub fn view_in<Tz: TimeZone>(&self, now: DateTime<Utc>, tz: &Tz) -> DashboardView
    where
        Tz::Offset: std::fmt::Display,
    {
        if self.calls.is_loading() {
            return DashboardView::loading();
        }

        let sorted = sort_upcoming_in(self.calls.calls(), tz);
        let nearest = select_nearest(&sorted).cloned();
        let today = now.with_timezone(tz).date_naive();
        let today: Vec<_> = filter_today_with_limit(&sorted, today, tz, self.config.today_limit)
            .iter()
            .map(|m| MeetingCard::new(m, &self.config, tz))
            .collect();

        let hero = match nearest {
            Some(ref meeting) => HeroBanner::for_meeting(meeting, tz),
            None => HeroBanner::empty(),
        };

        DashboardView {
            loading: false,
            upcoming_count: sorted.len(),
            nearest,
            hero: Some(hero),
            empty_today_text: today
                .is_empty()
                .then(|| NO_MEETING_TODAY_TEXT.to_string()),
            today,
        }
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("config", &self.config)
            .field("source", &self.source.name())
            .field("calls", &self.calls)
            .finish()
    }
}
