//! medcabinet library root.
//! Exposes the CLI parser, the high-level run() function and the cabinet
//! core (store, filters, alerts, deletion) for embedding and tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use logging::{LogConfig, init_logging};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Categories => cli::commands::categories::handle(cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::AutoRefill { .. } => cli::commands::refill::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Alerts => cli::commands::alerts::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Shell => cli::shell::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics to stderr
    init_logging(&LogConfig::from_verbosity(cli.verbose))?;

    // 3️⃣ load config once
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // 4️⃣ command line overrides
    if cli.no_alert {
        cfg.low_quantity_alert = false;
    }

    dispatch(&cli, &cfg)
}
