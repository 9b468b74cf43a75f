//! Main application entry point

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dv_store::SaveDetails;

mod cli;
mod commands;
mod config;
mod navigation;

use crate::cli::{Cli, Command};
use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.into());
    let config = AppConfig::load(&config_path)?;
    let store_dir = cli.store_dir.clone().unwrap_or(config.store_dir);

    if let Command::Validate { file } = &cli.command {
        return commands::run_validate(file);
    }

    info!("Starting datavis with store {}", store_dir.display());
    let app = commands::open_app(&store_dir, config.settings).await?;

    match cli.command {
        Command::Validate { .. } => Ok(()),
        Command::Open { id } => commands::run_open(&app, &id).await,
        Command::Rename {
            id,
            name,
            description,
        } => commands::run_rename(&app, &id, SaveDetails::new(name, description)).await,
        Command::SaveAs {
            id,
            name,
            description,
        } => commands::run_save_as(&app, &id, SaveDetails::new(name, description)).await,
        Command::Delete { id } => commands::run_delete(&app, &id).await,
    }
}

/// `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
