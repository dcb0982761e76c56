//! Configuration commands.

use std::path::Path;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Dump the current configuration to stdout.
pub fn dump(config: &ClientConfig, path: &Path) -> ClientResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ClientError::Config(format!("failed to serialize config: {}", e)))?;
    println!("# config.toml ({})", path.display());
    println!("{}", toml_str);
    Ok(())
}

/// Validate the configuration.
pub fn validate(config: &ClientConfig) -> ClientResult<()> {
    config.dashboard_config()?;
    println!("Configuration is valid.");
    Ok(())
}

/// Show the configuration and calls file paths.
pub fn path(config_path: &Path, calls_path: &Path) -> ClientResult<()> {
    println!("config: {}", config_path.display());
    println!("calls: {}", calls_path.display());
    Ok(())
}
