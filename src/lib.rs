//! fleetsheet library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use db::migrate::run_pending_migrations;
use db::pool::DbPool;
use errors::AppResult;

/// Open the configured database and bring its schema up to date.
fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    run_pending_migrations(&pool.conn)?;
    Ok(pool)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Employee { action } => {
            commands::employee::handle(action, cfg, &mut open_pool(cfg)?)
        }
        Commands::Entry { action } => commands::entry::handle(action, cfg, &mut open_pool(cfg)?),
        Commands::List { search } => {
            commands::list::handle(search, false, cfg, &mut open_pool(cfg)?)
        }
        Commands::Summary { search } => {
            commands::list::handle(search, true, cfg, &mut open_pool(cfg)?)
        }
        Commands::Print { .. } => commands::print::handle(&cli.command, cfg, &mut open_pool(cfg)?),
        Commands::Export { .. } => commands::export::handle(&cli.command, &mut open_pool(cfg)?),
        Commands::Import {
            employees,
            entries,
            yes,
        } => commands::import::handle(employees, entries, *yes, &mut open_pool(cfg)?),
        Commands::Backup { file, compress } => {
            commands::backup::handle(file, *compress, cfg, &mut open_pool(cfg)?)
        }
        Commands::Log { print } => commands::log::handle(*print, &mut open_pool(cfg)?),
        Commands::Db {
            check,
            vacuum,
            info,
        } => commands::db::handle(*check, *vacuum, *info, cfg, &mut open_pool(cfg)?),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // Command-line DB override wins over the config file.
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
