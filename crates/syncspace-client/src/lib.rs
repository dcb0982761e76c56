//! CLI, configuration and terminal rendering
//!
//! This crate provides the `syncspace` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use cli::Cli;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
