//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::runtime::RunMode;

/// marginbell - exchange margin check with Telegram notifications.
#[derive(Parser, Debug)]
#[command(name = "marginbell")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the notifier and the liveness endpoint
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `marginbell check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file and environment
    Config(ConfigPathArg),
    /// Query the exchange balance once
    Balance(ConfigPathArg),
    /// Send a Telegram test message
    Telegram(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Which component runs on the main task
    #[arg(long, value_enum, default_value_t = RunMode::Worker)]
    pub mode: RunMode,

    /// Override the liveness listener port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Log notifications instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}
