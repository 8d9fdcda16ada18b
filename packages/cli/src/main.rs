mod auth;
mod cli;
mod commands;
mod config;
mod error;

use anyhow::Context;
use clap::Parser;
use content_store::ContentStore;
use tracing::{Level, debug};

use crate::auth::AdminGate;
use crate::cli::Cli;
use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    debug!(
        backend = ?config.storage.backend,
        data_dir = %config.storage.data_dir.display(),
        "Config loaded"
    );

    if cli.command.requires_admin() {
        AdminGate::new(&config.auth)
            .authorize(cli.password.as_deref())
            .context("Admin access denied")?;
    }

    let backend = config
        .storage
        .open()
        .context("Failed to open content storage")?;
    let mut store = ContentStore::open(backend);

    let stdout = std::io::stdout();
    commands::run(cli.command, &mut store, &mut stdout.lock())?;

    Ok(())
}
