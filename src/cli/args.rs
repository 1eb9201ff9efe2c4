//! CLI argument definitions using clap
//!
//! Commands:
//! - trivia init --config <path>
//! - trivia seed --config <path>
//! - trivia serve --config <path> [--port <port>] [--in-memory]

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Trivia - question bank and quiz API
#[derive(Parser, Debug)]
#[command(name = "trivia")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// Where configuration and data come from
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Path to configuration file
    #[arg(long, default_value = "./trivia.json")]
    pub config: PathBuf,

    /// Database connection string, overriding the config file
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database schema
    Init {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Insert the default categories into an empty database
    Seed {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Start the HTTP API
    Serve {
        #[command(flatten)]
        store: StoreArgs,

        /// Port to listen on, overriding the config file
        #[arg(long)]
        port: Option<u16>,

        /// Serve from a seeded in-memory store instead of the database
        #[arg(long)]
        in_memory: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
