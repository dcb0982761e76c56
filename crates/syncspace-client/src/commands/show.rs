//! One-shot dashboard output.

use std::path::Path;

use chrono::{DateTime, Utc};
use syncspace_core::CountdownState;
use syncspace_dashboard::{Dashboard, DashboardView};

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::render::{ShowOutput, render_text};

use super::open_dashboard;

/// Reads the calls once and prints the dashboard.
pub async fn run(config: &ClientConfig, calls: Option<&Path>, json: bool) -> ClientResult<()> {
    let mut dashboard = open_dashboard(config, calls)?;
    dashboard.refresh().await?;
    println!("{}", render(&dashboard, Utc::now(), json)?);
    Ok(())
}

fn render(dashboard: &Dashboard, now: DateTime<Utc>, json: bool) -> ClientResult<String> {
    let view = dashboard.view(now);
    let countdown = snapshot(&view, now);
    if json {
        let output = ShowOutput {
            view: &view,
            countdown: &countdown,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(render_text(&view, &countdown).trim_end().to_string())
    }
}

/// The countdown as a single tick at `now` would show it.
fn snapshot(view: &DashboardView, now: DateTime<Utc>) -> CountdownState {
    let mut state = CountdownState::new();
    state.apply(view.nearest.as_ref(), now);
    state
}
