//! syncspace CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use syncspace_client::cli::{Cli, Command, ConfigAction};
use syncspace_client::commands;
use syncspace_client::config::ClientConfig;
use syncspace_client::error::ClientResult;
use syncspace_core::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let config_path = cli.config.clone().unwrap_or_else(ClientConfig::default_path);
    let config = if cli.config.is_some() {
        ClientConfig::load_from(&config_path)?
    } else {
        ClientConfig::load()?
    };

    let tracing = if cli.debug || config.debug {
        TracingConfig::debug()
    } else if matches!(cli.command, Some(Command::Watch)) {
        TracingConfig::watch()
    } else {
        TracingConfig::default()
    };
    init_tracing(tracing)?;

    let calls = cli.calls.as_deref();
    match cli.command {
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config, &config_path),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(&config_path, &config.calls_path(calls)),
        },
        Some(Command::Watch) => commands::watch::run(&config, calls, cli.json).await,
        Some(Command::Show) | None => commands::show::run(&config, calls, cli.json).await,
    }
}
