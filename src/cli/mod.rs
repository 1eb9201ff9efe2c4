//! CLI module for the trivia API
//!
//! Provides command-line interface for:
//! - init: Create the database schema
//! - seed: Insert the default categories
//! - serve: Run the HTTP API

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, StoreArgs};
pub use commands::{init, resolve_config, run_command, seed, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};

use crate::observability::{init_logging, LogFormat};

/// Parse arguments, install logging and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    if let Err(e) = init_logging(cli.verbose, format) {
        eprintln!("{}", e);
    }

    run_command(cli.command)
}
