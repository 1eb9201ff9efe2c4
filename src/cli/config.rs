//! Configuration file
//!
//! ```json
//! {
//!   "host": "0.0.0.0",
//!   "port": 5000,
//!   "cors_origins": ["http://localhost:3000"],
//!   "database_url": "sqlite://trivia.db",
//!   "max_connections": 5
//! }
//! ```
//!
//! Every field is optional. A missing file means all defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// sqlx connection string (default: "sqlite://trivia.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Pool size (default: 5)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite://trivia.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            return Self::load(path);
        }

        info!(path = %path.display(), "No config file, using defaults");
        Ok(Self::default())
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.database_url.trim().is_empty() {
            return Err(CliError::config_error("database_url must not be empty"));
        }

        if self.max_connections == 0 {
            return Err(CliError::config_error("max_connections must be > 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        Ok(())
    }
}
