//! `translations:import` command handler

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use clap::Args;
use tracing::{info, warn};
use crate::config::SourceConfig;
use crate::database::TranslationStore;
use crate::handlers::console::Console;
use crate::services::{ImportOptions, ImportSummary, Importer};
use crate::utils::errors::Result;
use crate::utils::logging::log_import_summary;

pub const OVERWRITE_QUESTION: &str =
    "Are you really sure you want to overwrite all translations in the database? This action cannot be undone.";

/// Import translations from the locale source directory
#[derive(Debug, Clone, Default, Args)]
pub struct ImportArgs {
    /// Locales that should be ignored during the importing process, ex: --ignore-locales=fr,de
    #[arg(long, value_delimiter = ',', value_name = "LOCALES")]
    pub ignore_locales: Vec<String>,

    /// Groups that should not be imported, ex: --ignore-groups=routes,admin/non-editable-stuff
    #[arg(long, value_delimiter = ',', value_name = "GROUPS")]
    pub ignore_groups: Vec<String>,

    /// Overwrite locales already present in existing rows (asks for confirmation)
    #[arg(long)]
    pub overwrite_existing_translations: bool,

    /// Skip the overwrite confirmation and answer yes
    #[arg(long, requires = "overwrite_existing_translations")]
    pub force: bool,

    /// Never prompt; the overwrite confirmation takes its default answer (no)
    #[arg(short = 'n', long)]
    pub no_interaction: bool,

    /// Add locales that existing rows do not contain yet
    #[arg(long)]
    pub merge_new_locales: bool,

    /// Translation source directory, overriding the configured one
    #[arg(long, value_name = "DIR")]
    pub lang_path: Option<PathBuf>,

    /// Create the default translations table before importing
    #[arg(long)]
    pub migrate: bool,
}

fn to_set(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

impl ImportArgs {
    /// Build run options; `overwrite_confirmed` is the answer to the prompt
    pub fn options(&self, overwrite_confirmed: bool) -> ImportOptions {
        ImportOptions {
            ignore_locales: to_set(&self.ignore_locales),
            ignore_groups: to_set(&self.ignore_groups),
            overwrite_existing: self.overwrite_existing_translations && overwrite_confirmed,
            merge_new_locales: self.merge_new_locales,
        }
    }

    /// Source settings with the command line override applied
    pub fn source_config(&self, configured: &SourceConfig) -> SourceConfig {
        let mut source = configured.clone();
        if let Some(path) = &self.lang_path {
            source.lang_path = path.to_string_lossy().into_owned();
        }
        source
    }

    fn confirm_overwrite<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<bool> {
        if !self.overwrite_existing_translations {
            return Ok(false);
        }
        if self.force {
            return Ok(true);
        }
        if self.no_interaction {
            return Ok(false);
        }
        console.confirm(OVERWRITE_QUESTION)
    }
}

/// Handle `translations:import`
pub async fn handle_import<S, R, W>(
    store: S,
    source: SourceConfig,
    args: &ImportArgs,
    console: &mut Console<R, W>,
) -> Result<ImportSummary>
where
    S: TranslationStore,
    R: BufRead,
    W: Write,
{
    let confirmed = args.confirm_overwrite(console)?;
    if args.overwrite_existing_translations && !confirmed {
        warn!("Overwrite not confirmed, existing translations will be kept");
    }

    let options = args.options(confirmed);
    info!(
        lang_path = %source.lang_path,
        overwrite = options.overwrite_existing,
        merge_new_locales = options.merge_new_locales,
        ignored_locales = ?options.ignore_locales,
        ignored_groups = ?options.ignore_groups,
        "Starting translations import"
    );

    let importer = Importer::new(store, source);
    let summary = importer.run(&options, console).await?;

    console.info(&summary.to_string())?;
    log_import_summary(&summary);

    Ok(summary)
}
