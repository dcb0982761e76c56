//! Live countdown output.

use std::future::Future;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use syncspace_core::CountdownState;
use syncspace_dashboard::{CountdownTicker, Dashboard};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::ClientResult;

use super::open_dashboard;

/// Prints every countdown change until Ctrl-C.
pub async fn run(config: &ClientConfig, calls: Option<&Path>, json: bool) -> ClientResult<()> {
    let dashboard = open_dashboard(config, calls)?;
    let ticker = CountdownTicker::new(dashboard.config().ticker.clone());
    let shutdown = async {
        let result = tokio::signal::ctrl_c().await;
        info!("Interrupted, stopping countdown");
        result
    };

    // Stdout locks per write, so each line goes out whole.
    let mut out = std::io::stdout();
    follow(
        dashboard,
        ticker,
        config.refresh_interval(),
        shutdown,
        json,
        &mut out,
    )
    .await
}

/// Drives `ticker` at the dashboard's nearest meeting and writes one line per
/// display change to `out`, re-reading the source every `refresh` period.
async fn follow<S>(
    mut dashboard: Dashboard,
    mut ticker: CountdownTicker,
    refresh: Option<Duration>,
    shutdown: S,
    json: bool,
    out: &mut dyn Write,
) -> ClientResult<()>
where
    S: Future<Output = std::io::Result<()>>,
{
    let mut rx = ticker.subscribe();
    dashboard.refresh().await?;
    ticker.retarget(dashboard.nearest().as_ref());

    let mut reload = refresh.map(|period| {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        interval
    });

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            result = &mut shutdown => {
                result?;
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                writeln!(out, "{}", format_line(&state, json)?)?;
                out.flush()?;
            }
            _ = next_reload(reload.as_mut()) => {
                if dashboard.refresh().await.is_err() {
                    continue;
                }
                if ticker.retarget(dashboard.nearest().as_ref()) {
                    debug!(meeting_id = ?ticker.target_id(), "Nearest meeting changed");
                }
            }
        }
    }

    ticker.cancel();
    Ok(())
}

async fn next_reload(interval: Option<&mut tokio::time::Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn format_line(state: &CountdownState, json: bool) -> ClientResult<String> {
    if json {
        return Ok(serde_json::to_string(state)?);
    }
    Ok(match state.target_meeting_id {
        Some(ref id) => format!("{id}  {}", state.display_text),
        None => state.display_text.clone(),
    })
}
