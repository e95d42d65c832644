//! jornada library root.
//! Exposes the CLI parser, the high-level run() function and the engine
//! modules (validation, derivation, reconciliation, save negotiation).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::Notifier;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config, notifier: &Notifier) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, notifier),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, notifier),
        Commands::Validate { file } => cli::commands::validate::handle(file, notifier),
        Commands::Table { file } => cli::commands::table::handle(file, cfg, notifier).await,
        Commands::Submit { file, assume_yes } => {
            cli::commands::submit::handle(file, *assume_yes, cfg, notifier).await
        }
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jornada=warn".into()),
        )
        .try_init()
        .ok();

    let cli = Cli::parse();

    let mut cfg = Config::load();
    if let Some(custom_store) = &cli.store {
        cfg.store_dir = custom_store.clone();
    }

    let notifier = Notifier::new(cli.test);

    dispatch(&cli, &cfg, &notifier).await
}
