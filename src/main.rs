//! # Main Entry Point
//!
//! Wires the layers together:
//! - Domain: Configuration, Types and Traits
//! - Application: Registry, Dispatcher, Parsing
//! - Infrastructure: Matrix
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{Client, config::SyncSettings};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::application::dispatcher::Dispatcher;
use crate::application::registry::CommandRegistry;
use crate::domain::config::{AppConfig, DEFAULT_CONFIG_PATH, LoggingConfig};
use crate::strings::logs;

/// Chat-bot command dispatcher for Matrix.
#[derive(Debug, Parser)]
#[command(name = "commandeer", version, about)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Command definition directory (overrides `commands.directory`)
    #[arg(long)]
    commands: Option<PathBuf>,

    /// Load config and commands, list them, and exit without logging in
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    let _guard = init_logging(&config.logging)?;
    tracing::info!("{}", logs::config_loaded(&config.services.matrix.username));

    // 3. Build the registry once; it is read-only from here on
    let commands_dir = cli
        .commands
        .unwrap_or_else(|| PathBuf::from(&config.commands.directory));
    let registry = CommandRegistry::load(&commands_dir)?;
    if registry.is_empty() {
        tracing::warn!("{}", logs::no_commands(&commands_dir.display().to_string()));
    }

    if cli.check {
        for summary in registry.summaries() {
            println!("{}\t{}", summary.name, summary.description);
        }
        return Ok(());
    }

    let dispatcher = Arc::new(Dispatcher::new(
        registry,
        config.commands.error_message.clone(),
    ));

    // 4. Matrix Setup
    let matrix = &config.services.matrix;
    let client = Client::builder()
        .homeserver_url(&matrix.homeserver)
        .build()
        .await
        .context("Failed to build Matrix client")?;

    client
        .matrix_auth()
        .login_username(&matrix.username, &matrix.password)
        .initial_device_display_name("commandeer")
        .send()
        .await
        .context("Matrix login failed")?;

    tracing::info!("{}", logs::logged_in(&matrix.username));

    if let Some(name) = &matrix.display_name
        && let Err(e) = client.account().set_display_name(Some(name.as_str())).await
    {
        tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
    }

    // 5. Event Subscription
    let start_time = std::time::SystemTime::now();
    infrastructure::matrix::register_dispatch(
        &client,
        dispatcher,
        config.commands.prefix.clone(),
        start_time,
    );

    // 6. Sync: one initial round, then forever
    let response = client
        .sync_once(SyncSettings::default())
        .await
        .context("Initial sync failed")?;
    tracing::info!("{}", logs::READY);

    tracing::info!("{}", logs::SYNC_LOOP_START);
    client
        .sync(SyncSettings::default().token(response.next_batch))
        .await
        .context("Sync loop failed")?;

    Ok(())
}

/// Stdout plus a fresh `session.log` in the configured directory.
/// `RUST_LOG` takes precedence over the configured filter.
fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let dir = Path::new(&config.directory);
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    // Clear previous session log
    let log_path = dir.join("session.log");
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(dir, "session.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.filter));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to initialise logging")?;

    Ok(guard)
}
