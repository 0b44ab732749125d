//! Translations importer
//!
//! Main application entry point

use std::path::PathBuf;
use clap::Parser;
use tracing::{error, info};

use translations_import::{
    config::Settings,
    handlers::{handle_command, Command, Console},
    utils::logging,
};

#[derive(Parser)]
#[command(name = "translations-import")]
#[command(version)]
#[command(about = "Import translations from a locale directory into the database")]
struct Cli {
    /// Configuration file (defaults to an optional `config.*` in the working directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::load(cli.config.as_deref())?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", translations_import::info());

    let mut console = Console::stdio();
    if let Err(e) = handle_command(cli.command, &settings, &mut console).await {
        error!(error = %e, severity = %e.severity(), "Import aborted");
        return Err(e.into());
    }

    Ok(())
}
