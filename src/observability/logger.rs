//! Tracing subscriber setup.
//!
//! Filter priority: `RUST_LOG` > verbosity flag > `info`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::{ObservabilityError, ObservabilityResult};

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Directive for a `-v` count
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbose: u8) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level_for_verbosity(verbose))
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(verbose: u8, format: LogFormat) -> ObservabilityResult<()> {
    let registry = tracing_subscriber::registry().with(build_filter(verbose));

    let result = match format {
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };

    result.map_err(|e| ObservabilityError::new(format!("Failed to install logger: {}", e)))
}
