// src/cli/mod.rs
use clap::Parser;
use thiserror::Error;

pub mod commands;
pub mod handlers;
pub mod menu;
pub mod view;

pub use commands::PassmintCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON output (one-shot commands)
    #[arg(long)]
    pub json: bool,

    /// Log level filter (e.g. debug, passmint=debug)
    #[arg(long, env = "PASSMINT_LOG", default_value = "warn")]
    pub log_level: String,

    /// Command to execute; with no command the interactive menu runs
    #[command(subcommand)]
    pub command: Option<PassmintCommand>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
