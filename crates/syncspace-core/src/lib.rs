//! Core types: meeting records, start times, timeline selection, countdown,
//! formatting

pub mod clock;
pub mod format;
pub mod meeting;
pub mod time;
pub mod timeline;
pub mod tracing;

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::{
    format_clock_time, format_date, format_date_time, format_date_time_in, format_long_date,
    meeting_link, meeting_path,
};
pub use meeting::MeetingRecord;
pub use time::{SortKey, StartTime};
pub use timeline::{
    Countdown, CountdownState, NO_MEETING_TEXT, STARTED_TEXT, TODAY_LIMIT, compute_countdown,
    compute_countdown_in, filter_today, filter_today_local, filter_today_with_limit, select_nearest,
    sort_upcoming, sort_upcoming_in,
};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
