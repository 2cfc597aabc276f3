//! fpkiosk library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod mail;
pub mod models;
pub mod protocol;
pub mod serial;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Ports => cli::commands::ports::handle(),
        Commands::Enroll { .. } => cli::commands::enroll::handle(&cli.command, cfg),
        Commands::Attend { .. } => cli::commands::attend::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once, then apply the session-only CLI overrides.
    let mut cfg = Config::load()?;

    if let Some(master) = &cli.master {
        cfg.master_ledger = master.clone();
    }
    if let Some(ledger) = &cli.ledger {
        cfg.attendance_ledger = ledger.clone();
    }
    if let Some(port) = &cli.port {
        cfg.port = port.clone();
    }

    dispatch(&cli, &cfg)
}
