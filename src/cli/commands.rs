//! CLI command implementations
//!
//! Each command resolves its configuration, opens the store and does one
//! thing. Commands run on a tokio runtime built by [`run_command`].

use std::sync::Arc;

use tracing::info;

use crate::http_server::HttpServer;
use crate::rest_api::TriviaState;
use crate::store::{seed_default_categories, MemoryStore, SqliteStore, TriviaStore};

use super::args::{Command, StoreArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Load the config file and apply command-line overrides
pub fn resolve_config(args: &StoreArgs) -> CliResult<Config> {
    let mut config = Config::load_or_default(&args.config)?;

    if let Some(url) = &args.database_url {
        config.database_url = url.clone();
    }

    config.validate()?;
    Ok(config)
}

async fn open_store(config: &Config) -> CliResult<SqliteStore> {
    let store = SqliteStore::connect(&config.database_url, config.max_connections)
        .await
        .map_err(|e| {
            CliError::store_error(format!(
                "Failed to open database '{}': {}",
                config.database_url, e
            ))
        })?;

    info!(database_url = %config.database_url, "Database opened");
    Ok(store)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        match cmd {
            Command::Init { store } => init(&store).await,
            Command::Seed { store } => seed(&store).await,
            Command::Serve {
                store,
                port,
                in_memory,
            } => serve(&store, port, in_memory).await,
        }
    })
}

/// Create the schema in the configured database
pub async fn init(args: &StoreArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    let store = open_store(&config).await?;
    store.close().await;

    println!("Initialized trivia database at {}", config.database_url);
    Ok(())
}

/// Insert default categories into an empty database
pub async fn seed(args: &StoreArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    let store = open_store(&config).await?;

    let inserted = seed_default_categories(&store).await?;
    store.close().await;

    if inserted == 0 {
        println!("Categories already present; nothing to seed");
    } else {
        println!("Seeded {} categories", inserted);
    }
    Ok(())
}

/// Serve the HTTP API until Ctrl-C
pub async fn serve(args: &StoreArgs, port: Option<u16>, in_memory: bool) -> CliResult<()> {
    let mut config = resolve_config(args)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    let store: Arc<dyn TriviaStore> = if in_memory {
        let store = MemoryStore::new();
        seed_default_categories(&store).await?;
        info!("Serving from in-memory store");
        Arc::new(store)
    } else {
        Arc::new(open_store(&config).await?)
    };

    let state = Arc::new(TriviaState::new(store));
    let server = HttpServer::new(config.server, state);

    server
        .start()
        .await
        .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_database_url_flag_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"database_url": "sqlite://from_file.db"}"#)
            .unwrap();

        let args = StoreArgs {
            config: file.path().to_path_buf(),
            database_url: Some("sqlite://from_flag.db".to_string()),
        };

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.database_url, "sqlite://from_flag.db");
    }

    #[test]
    fn test_missing_config_file_is_not_an_error() {
        let args = StoreArgs {
            config: PathBuf::from("/nonexistent/trivia.json"),
            database_url: None,
        };

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.database_url, "sqlite://trivia.db");
    }

    #[tokio::test]
    async fn test_init_then_seed_sqlite_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("trivia.db").display());
        let args = StoreArgs {
            config: dir.path().join("trivia.json"),
            database_url: Some(url.clone()),
        };

        init(&args).await.unwrap();
        seed(&args).await.unwrap();
        seed(&args).await.unwrap();

        let store = SqliteStore::connect(&url, 1).await.unwrap();
        assert_eq!(store.list_categories().await.unwrap().len(), 6);
    }
}
