//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function, and the timing
//! engine (session state machine + time derivations).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use models::locale::LocaleCode;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Start { .. } => cli::commands::start::handle(&cli.command, cfg),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
        Commands::Clock { .. } => cli::commands::clock::handle(&cli.command, cfg),
        Commands::Where => cli::commands::locate::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = utils::path::resolve_config_path(cli.config.as_deref());
    let mut cfg = Config::load(&config_path)?;

    if let Some(code) = &cli.locale {
        cfg.locale =
            LocaleCode::from_code(code).ok_or_else(|| AppError::InvalidLocale(code.clone()))?;
    }

    utils::logging::init_logging(&cfg.log_level);
    tracing::debug!(config = %config_path.display(), "Configuration loaded");

    dispatch(&cli, &cfg, &config_path)
}
