//! Live countdown timer.
//!
//! [`CountdownTicker`] owns at most one background task that recomputes the
//! countdown to the current target meeting on a fixed cadence and publishes
//! the result on a watch channel. Changing the target cancels the old task
//! before starting a new one; dropping the ticker cancels unconditionally.

use std::sync::Arc;

use syncspace_core::{Clock, CountdownState, MeetingRecord, SystemClock};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::config::TickerConfig;

/// Owned handle to the countdown timer.
pub struct CountdownTicker {
    config: TickerConfig,
    clock: Arc<dyn Clock>,
    state: Arc<watch::Sender<CountdownState>>,
    target: Option<MeetingRecord>,
    task: Option<JoinHandle<()>>,
}

impl CountdownTicker {
    /// Creates an idle ticker reading the system clock.
    pub fn new(config: TickerConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an idle ticker reading `clock`.
    pub fn with_clock(config: TickerConfig, clock: Arc<dyn Clock>) -> Self {
        let (state, _) = watch::channel(CountdownState::new());
        Self {
            config,
            clock,
            state: Arc::new(state),
            target: None,
            task: None,
        }
    }

    /// Subscribes to display updates.
    ///
    /// Subscribers are woken when a tick changes the display text or the
    /// target id, and when the target is cleared. A retarget by itself does
    /// not wake them; the new id arrives with the first tick.
    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current countdown state.
    pub fn current(&self) -> CountdownState {
        self.state.borrow().clone()
    }

    /// The id of the meeting being counted down to.
    pub fn target_id(&self) -> Option<&str> {
        self.target.as_ref().map(|m| m.id.as_str())
    }

    /// Returns `true` while a tick task is alive.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Points the countdown at `target`.
    ///
    /// Does nothing if the target id and start are unchanged. Otherwise the
    /// running task is cancelled and, if there is a new target, a fresh one is
    /// started with an immediate first tick. A rescheduled meeting keeping its
    /// id counts as a new target. With no target the display switches to the
    /// "no meeting" text. Returns `true` if the target changed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn retarget(&mut self, target: Option<&MeetingRecord>) -> bool {
        let unchanged = match (&self.target, target) {
            (Some(current), Some(new)) => {
                current.id == new.id && current.starts_at == new.starts_at
            }
            (None, None) => true,
            _ => false,
        };
        if unchanged && (self.task.is_some() || target.is_none()) {
            return false;
        }

        self.cancel();
        self.target = target.cloned();

        let Some(target) = target else {
            let now = self.clock.now();
            self.state.send_if_modified(|state| state.apply(None, now));
            debug!("Countdown target cleared");
            return true;
        };

        info!(
            meeting_id = %target.id,
            interval_ms = self.config.interval.as_millis() as u64,
            "Countdown started"
        );
        self.task = Some(tokio::spawn(run_ticks(
            target.clone(),
            self.config.clone(),
            self.clock.clone(),
            self.state.clone(),
        )));
        true
    }

    /// Stops the tick task. Calling this on a stopped ticker is a no-op.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!(meeting_id = ?self.target_id(), "Countdown stopped");
        }
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for CountdownTicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountdownTicker")
            .field("config", &self.config)
            .field("target_id", &self.target_id())
            .field("running", &self.is_running())
            .finish()
    }
}

async fn run_ticks(
    target: MeetingRecord,
    config: TickerConfig,
    clock: Arc<dyn Clock>,
    state: Arc<watch::Sender<CountdownState>>,
) {
    let mut ticks = tokio::time::interval(config.interval);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticks.tick().await;
        let now = clock.now();
        // An unusable start leaves the display as it was.
        state.send_if_modified(|s| s.apply(Some(&target), now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use chrono::{DateTime, TimeZone, Utc};
    use syncspace_core::{ManualClock, NO_MEETING_TEXT, STARTED_TEXT};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap()
    }

    fn meeting_in(id: &str, seconds: i64) -> MeetingRecord {
        let starts_at = start() + chrono::Duration::seconds(seconds);
        MeetingRecord::new(id).with_starts_at(starts_at.to_rfc3339())
    }

    fn manual_ticker() -> (CountdownTicker, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(start()));
        let ticker = CountdownTicker::with_clock(TickerConfig::default(), clock.clone());
        (ticker, clock)
    }

    async fn wait_for_text(rx: &mut watch::Receiver<CountdownState>, text: &str) {
        tokio::time::timeout(Duration::from_secs(10), rx.wait_for(|s| s.display_text == text))
            .await
            .expect("display never reached expected text")
            .expect("ticker dropped");
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_immediate() {
        let (mut ticker, _clock) = manual_ticker();
        let mut rx = ticker.subscribe();

        assert!(ticker.retarget(Some(&meeting_in("m1", 3661))));
        wait_for_text(&mut rx, "1h 1m 1s").await;

        assert!(ticker.is_running());
        assert_eq!(ticker.target_id(), Some("m1"));
        assert_eq!(ticker.current().target_meeting_id.as_deref(), Some("m1"));
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_follow_the_clock() {
        let (mut ticker, clock) = manual_ticker();
        let mut rx = ticker.subscribe();

        ticker.retarget(Some(&meeting_in("m1", 2)));
        wait_for_text(&mut rx, "0h 0m 2s").await;

        clock.advance(chrono::Duration::seconds(1));
        wait_for_text(&mut rx, "0h 0m 1s").await;

        clock.advance(chrono::Duration::seconds(1));
        wait_for_text(&mut rx, STARTED_TEXT).await;
    }

    #[tokio::test(start_paused = true)]
    async fn same_target_is_a_no_op() {
        let (mut ticker, _clock) = manual_ticker();
        let target = meeting_in("m1", 60);

        assert!(ticker.retarget(Some(&target)));
        assert!(!ticker.retarget(Some(&target)));
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn new_target_restarts_countdown() {
        let (mut ticker, _clock) = manual_ticker();
        let mut rx = ticker.subscribe();

        ticker.retarget(Some(&meeting_in("m1", 60)));
        wait_for_text(&mut rx, "0h 1m 0s").await;

        assert!(ticker.retarget(Some(&meeting_in("m2", 120))));
        wait_for_text(&mut rx, "0h 2m 0s").await;
        assert_eq!(ticker.target_id(), Some("m2"));

        // The old task must not overwrite the new target's display.
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(ticker.current().display_text, "0h 2m 0s");
        assert_eq!(ticker.current().target_meeting_id.as_deref(), Some("m2"));
    }

    #[tokio::test(start_paused = true)]
    async fn switching_between_started_meetings_wakes_subscribers() {
        let (mut ticker, _clock) = manual_ticker();
        let mut rx = ticker.subscribe();

        ticker.retarget(Some(&meeting_in("m1", -300)));
        wait_for_text(&mut rx, STARTED_TEXT).await;
        rx.borrow_and_update();

        assert!(ticker.retarget(Some(&meeting_in("m2", -60))));
        let woke = tokio::time::timeout(Duration::from_secs(5), rx.changed()).await;
        assert!(matches!(woke, Ok(Ok(()))));

        let state = rx.borrow_and_update().clone();
        assert_eq!(state.target_meeting_id.as_deref(), Some("m2"));
        assert_eq!(state.display_text, STARTED_TEXT);
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduled_meeting_restarts_countdown() {
        let (mut ticker, _clock) = manual_ticker();
        let mut rx = ticker.subscribe();

        ticker.retarget(Some(&meeting_in("m1", 60)));
        wait_for_text(&mut rx, "0h 1m 0s").await;

        assert!(ticker.retarget(Some(&meeting_in("m1", 3600))));
        wait_for_text(&mut rx, "1h 0m 0s").await;
        assert_eq!(ticker.target_id(), Some("m1"));

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(ticker.current().display_text, "1h 0m 0s");
        assert!(!ticker.retarget(Some(&meeting_in("m1", 3600))));
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_target_stops_and_shows_no_meeting() {
        let (mut ticker, _clock) = manual_ticker();
        let mut rx = ticker.subscribe();

        ticker.retarget(Some(&meeting_in("m1", 60)));
        wait_for_text(&mut rx, "0h 1m 0s").await;

        assert!(ticker.retarget(None));
        assert!(!ticker.is_running());
        assert_eq!(ticker.current().display_text, NO_MEETING_TEXT);
        assert_eq!(ticker.current().target_meeting_id, None);
        assert!(!ticker.retarget(None));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_idempotent_and_freezes_display() {
        let (mut ticker, clock) = manual_ticker();
        let mut rx = ticker.subscribe();

        ticker.retarget(Some(&meeting_in("m1", 60)));
        wait_for_text(&mut rx, "0h 1m 0s").await;

        ticker.cancel();
        ticker.cancel();
        assert!(!ticker.is_running());

        clock.advance(chrono::Duration::seconds(5));
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(ticker.current().display_text, "0h 1m 0s");
    }

    #[tokio::test(start_paused = true)]
    async fn retarget_after_cancel_restarts() {
        let (mut ticker, _clock) = manual_ticker();
        let target = meeting_in("m1", 60);

        ticker.retarget(Some(&target));
        ticker.cancel();
        assert!(ticker.retarget(Some(&target)));
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_start_holds_previous_display() {
        let (mut ticker, _clock) = manual_ticker();
        let mut rx = ticker.subscribe();

        ticker.retarget(Some(&meeting_in("good", 3661)));
        wait_for_text(&mut rx, "1h 1m 1s").await;

        let bad = MeetingRecord::new("bad").with_starts_at("not a date");
        assert!(ticker.retarget(Some(&bad)));

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(ticker.is_running());
        let state = ticker.current();
        assert_eq!(state.display_text, "1h 1m 1s");
        assert_eq!(state.target_meeting_id.as_deref(), Some("bad"));
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_the_task() {
        let (mut ticker, _clock) = manual_ticker();
        let mut rx = ticker.subscribe();

        ticker.retarget(Some(&meeting_in("m1", 60)));
        wait_for_text(&mut rx, "0h 1m 0s").await;
        rx.borrow_and_update();

        drop(ticker);
        let closed = tokio::time::timeout(Duration::from_secs(10), rx.changed()).await;
        assert!(matches!(closed, Ok(Err(_))));
    }
}
