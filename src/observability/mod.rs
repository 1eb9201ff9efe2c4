//! Observability subsystem for the trivia API
//!
//! Structured logging through `tracing`. HTTP requests are traced by the
//! server's `TraceLayer`; this module only installs the subscriber.

mod logger;

pub use logger::{init_logging, level_for_verbosity, LogFormat};

use thiserror::Error;

/// Observability error.
///
/// Never fatal: a missing logger must not stop the server.
#[derive(Debug, Error)]
#[error("[ERROR] TRIVIA_OBSERVABILITY_FAILED: {message}")]
pub struct ObservabilityError {
    message: String,
}

impl ObservabilityError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;
