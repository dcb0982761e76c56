//! Call source, countdown ticker and dashboard view composition.
//!
//! This crate ties the pure timeline functions of `syncspace-core` to a
//! running process:
//! - [`CallSource`] fetches the user's upcoming calls
//! - [`Dashboard`] derives the home page view from the latest fetch
//! - [`CountdownTicker`] keeps the live countdown to the nearest meeting
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use chrono::Utc;
//! use syncspace_dashboard::{CountdownTicker, Dashboard, DashboardConfig, FileSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DashboardConfig::default();
//!     let mut ticker = CountdownTicker::new(config.ticker.clone());
//!     let mut dashboard = Dashboard::new(config, Arc::new(FileSource::new("calls.json")));
//!
//!     dashboard.refresh().await?;
//!     let view = dashboard.view(Utc::now());
//!     ticker.retarget(view.nearest.as_ref());
//!     Ok(())
//! }
//! ```

mod config;
mod dashboard;
mod error;
mod source;
mod ticker;

pub use config::{DEFAULT_BASE_URL, DashboardConfig, MAX_TICK_INTERVAL, TickerConfig};
pub use dashboard::{
    Dashboard, DashboardView, EXPLORE_TEXT, HeroBanner, MeetingCard, NO_MEETING_TODAY_TEXT,
    SCHEDULE_PROMPT_TEXT, START_BUTTON_TEXT,
};
pub use error::{DashboardError, DashboardResult, SourceError, SourceResult};
pub use source::{BoxFuture, CallSource, CallsState, FileSource, StaticSource};
pub use ticker::CountdownTicker;
