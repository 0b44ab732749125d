//! Command handlers module
//!
//! This module contains handlers for all command line commands.

pub mod import;

use std::io::{BufRead, Write};
use clap::Subcommand;
use crate::config::Settings;
use crate::database::{create_pool, run_migrations, DatabaseConfig, PgTranslationRepository};
use crate::handlers::console::Console;
use crate::utils::errors::Result;

pub use import::{handle_import, ImportArgs};

/// All available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import translations from the locale source directory
    #[command(name = "translations:import")]
    Import(ImportArgs),
}

/// Main command dispatcher
pub async fn handle_command<R: BufRead, W: Write>(
    cmd: Command,
    settings: &Settings,
    console: &mut Console<R, W>,
) -> Result<()> {
    match cmd {
        Command::Import(args) => {
            let pool = create_pool(&DatabaseConfig::from(&settings.database)).await?;
            if args.migrate {
                run_migrations(&pool).await?;
            }

            let repository = PgTranslationRepository::new(pool, &settings.table);
            let source = args.source_config(&settings.source);
            handle_import(repository, source, &args, console).await?;
            Ok(())
        }
    }
}
