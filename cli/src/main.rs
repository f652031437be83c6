//! CLI entrypoint for trivia-api
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use trivia_application::QuestionRepository;
use trivia_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileStorageConfig, Fixtures,
    InMemoryQuestionRepository, SqliteQuestionRepository, StorageBackend,
};
use trivia_presentation::{AppState, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    apply_overrides(&cli, &mut config);
    config.validate()?;

    // Held until exit so buffered log lines reach the file
    let _guard = init_logging(&cli, &config.logging)?;

    info!("Starting trivia API");

    // === Dependency Injection ===
    let repository = open_repository(&config.storage)?;
    seed(repository.as_ref(), config.storage.fixtures.as_deref()).await?;

    let shutdown = CancellationToken::new();
    let on_signal = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            return;
        }
        info!("Shutting down");
        on_signal.cancel();
    });

    let addr = config.bind_addr()?;
    trivia_presentation::serve(addr, AppState::new(repository), shutdown)
        .await
        .with_context(|| format!("failed to serve on {addr}"))?;

    Ok(())
}

/// Command-line flags win over every config source
fn apply_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }
    if let Some(path) = &cli.database {
        config.storage.backend = StorageBackend::Sqlite;
        config.storage.path = Some(path.clone());
    }
    if cli.memory {
        config.storage.backend = StorageBackend::Memory;
    }
    if let Some(path) = &cli.fixtures {
        config.storage.fixtures = Some(path.clone());
    }
}

/// `-v` first, then `RUST_LOG`, then `logging.level`
fn init_logging(cli: &Cli, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbosity_filter() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level)),
    };
    let console = fmt::layer().with_target(false);

    let Some(file) = &logging.file else {
        tracing_subscriber::registry().with(filter).with(console).init();
        return Ok(None);
    };

    let dir = file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let prefix = file
        .file_name()
        .with_context(|| format!("logging.file has no file name: {}", file.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, prefix));
    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();

    Ok(Some(guard))
}

fn open_repository(storage: &FileStorageConfig) -> Result<Arc<dyn QuestionRepository>> {
    match storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            Ok(Arc::new(InMemoryQuestionRepository::new()))
        }
        StorageBackend::Sqlite => {
            let path = storage
                .path
                .as_ref()
                .context("storage.path is required for the sqlite backend")?;
            info!("Using SQLite storage at {}", path.display());
            Ok(Arc::new(SqliteQuestionRepository::open(path)?))
        }
    }
}

/// Apply the fixture file, or the standard categories to a store that has none
async fn seed(repository: &dyn QuestionRepository, fixtures: Option<&Path>) -> Result<()> {
    let fixtures = match fixtures {
        Some(path) => Fixtures::load(path)?,
        None => {
            if !repository.list_categories().await?.is_empty() {
                return Ok(());
            }
            Fixtures::default_categories()
        }
    };

    fixtures.apply(repository).await?;
    Ok(())
}
