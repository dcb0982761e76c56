//! Command implementations.

pub mod config;
pub mod show;
pub mod watch;

use std::path::Path;
use std::sync::Arc;

use syncspace_dashboard::{Dashboard, FileSource};

use crate::config::ClientConfig;
use crate::error::ClientResult;

/// Builds a dashboard reading calls from the resolved calls file.
pub(crate) fn open_dashboard(
    config: &ClientConfig,
    calls: Option<&Path>,
) -> ClientResult<Dashboard> {
    let dashboard_config = config.dashboard_config()?;
    let source = FileSource::new(config.calls_path(calls));
    Ok(Dashboard::new(dashboard_config, Arc::new(source)))
}
