//! Terminal rendering of the dashboard.

use std::fmt::Write;

use serde::Serialize;
use syncspace_core::CountdownState;
use syncspace_dashboard::DashboardView;

/// Title used for cards without a description.
const UNTITLED: &str = "(untitled)";

/// JSON payload printed by `show --json`.
#[derive(Debug, Serialize)]
pub struct ShowOutput<'a> {
    pub view: &'a DashboardView,
    pub countdown: &'a CountdownState,
}

/// Renders the dashboard as plain text.
pub fn render_text(view: &DashboardView, countdown: &CountdownState) -> String {
    if view.loading {
        return "Loading...\n".to_string();
    }

    let mut out = String::new();
    if let Some(ref hero) = view.hero {
        let _ = writeln!(out, "{}  {}", hero.heading, countdown.display_text);
        if !hero.time.is_empty() {
            let _ = writeln!(out, "{}", hero.time);
        }
        if !hero.date.is_empty() {
            let _ = writeln!(out, "{}", hero.date);
        }
    }

    out.push('\n');
    out.push_str("Today's Upcoming Meetings\n");
    if let Some(ref empty) = view.empty_today_text {
        let _ = writeln!(out, "  {empty}");
    }
    for card in &view.today {
        let title = card.title.as_deref().unwrap_or(UNTITLED);
        let link = card.link.as_deref().unwrap_or(&card.path);
        let _ = writeln!(out, "  {title}  {}  {link}", card.date);
    }
    out
}
