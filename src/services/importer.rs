//! Translation import service
//!
//! Walks every `(group, locale)` pair found in the source tree, dots the
//! group's keys and reconciles each entry with the translations table:
//!
//! - no row for `(group, key)`: insert `{locale: value}` unless the value is empty
//! - row exists, overwrite off: leave it alone without reading its translations
//! - row exists, overwrite on: replace the locale's value, but only when the
//!   row already has that locale
//!
//! "Empty" means the empty string only, which is also what JSON `null`
//! dots to. `"0"` and `false` are real translations and do create rows.
//!
//! Nothing is wrapped in a transaction. A failure aborts the run and keeps
//! whatever was written before it.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};
use crate::config::SourceConfig;
use crate::database::TranslationStore;
use crate::i18n::{flatten_group, load_group, scan_lang_directory};
use crate::models::{FlattenedTranslation, LocaleMap, TranslationRow};
use crate::utils::errors::Result;

/// Per-run switches, usually coming from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOptions {
    pub ignore_locales: BTreeSet<String>,
    pub ignore_groups: BTreeSet<String>,
    pub overwrite_existing: bool,
    /// Add locales missing from existing rows instead of dropping them
    pub merge_new_locales: bool,
}

impl ImportOptions {
    pub fn locale_can_be_imported(&self, locale: &str) -> bool {
        !self.ignore_locales.contains(locale)
    }

    pub fn group_can_be_imported(&self, group: &str) -> bool {
        !self.ignore_groups.contains(group)
    }
}

/// Why an entry left the table untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// New row with an empty value
    EmptyValue,
    /// Row exists and overwriting is disabled
    ExistingRow,
    /// Row exists but does not hold this locale
    MissingLocale,
    /// Row disappeared before it could be updated
    MissingRow,
}

/// Result of reconciling a single entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Created,
    Updated,
    Merged,
    Skipped(SkipReason),
}

/// Counters accumulated over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
    pub merged: usize,
    pub skipped_existing: usize,
    pub skipped_empty: usize,
    pub skipped_missing_locale: usize,
}

impl ImportSummary {
    pub fn record(&mut self, outcome: ReconcileOutcome) {
        match outcome {
            ReconcileOutcome::Created => self.created += 1,
            ReconcileOutcome::Updated => self.updated += 1,
            ReconcileOutcome::Merged => self.merged += 1,
            ReconcileOutcome::Skipped(SkipReason::EmptyValue) => self.skipped_empty += 1,
            ReconcileOutcome::Skipped(SkipReason::ExistingRow) => self.skipped_existing += 1,
            ReconcileOutcome::Skipped(SkipReason::MissingLocale | SkipReason::MissingRow) => {
                self.skipped_missing_locale += 1
            }
        }
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A total of {} translations have been created and {} translations have been updated",
            self.created, self.updated
        )?;
        if self.merged > 0 {
            write!(f, ", {} locales have been merged into existing translations", self.merged)?;
        }
        Ok(())
    }
}

/// Receives the operator-facing progress of a run
pub trait ImportProgress {
    fn group_skipped(&mut self, group: &str) -> std::io::Result<()>;
    fn locale_skipped(&mut self, group: &str, locale: &str) -> std::io::Result<()>;
    fn importing(&mut self, group: &str, locale: &str) -> std::io::Result<()>;
}

/// Synchronizes a translation source tree into a `TranslationStore`
pub struct Importer<S> {
    store: S,
    config: SourceConfig,
}

impl<S: TranslationStore> Importer<S> {
    pub fn new(store: S, config: SourceConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn lang_path(&self) -> PathBuf {
        PathBuf::from(&self.config.lang_path)
    }

    /// Import every group/locale pair not excluded by `options`
    pub async fn run<P: ImportProgress>(&self, options: &ImportOptions, progress: &mut P) -> Result<ImportSummary> {
        let lang_path = self.lang_path();
        let tree = scan_lang_directory(&lang_path)?;
        info!(path = %lang_path.display(), groups = tree.len(), "Scanned translation sources");

        let mut summary = ImportSummary::default();

        for (group, locales) in tree.iter() {
            if !options.group_can_be_imported(group) {
                progress.group_skipped(group)?;
                continue;
            }

            for locale in locales {
                if !options.locale_can_be_imported(locale) {
                    progress.locale_skipped(group, locale)?;
                    continue;
                }

                progress.importing(group, locale)?;
                let translations = load_group(&lang_path, locale, group).await?;

                for entry in flatten_group(group, locale, &translations, &self.config.key_separator) {
                    let outcome = self.reconcile(&entry, options).await?;
                    debug!(group = %entry.group, key = %entry.key, locale = %entry.locale, outcome = ?outcome, "Reconciled translation");
                    summary.record(outcome);
                }
            }
        }

        Ok(summary)
    }

    /// Create, update or skip a single dotted entry
    pub async fn reconcile(&self, entry: &FlattenedTranslation, options: &ImportOptions) -> Result<ReconcileOutcome> {
        if !options.overwrite_existing && !options.merge_new_locales {
            if self.store.exists(&entry.group, &entry.key).await? {
                return Ok(ReconcileOutcome::Skipped(SkipReason::ExistingRow));
            }
            return self.create(entry).await;
        }

        let Some(existing) = self.store.find(&entry.group, &entry.key).await? else {
            return self.create(entry).await;
        };

        if options.merge_new_locales && !existing.translations.contains(&entry.locale) && !entry.value.is_empty() {
            return self.write_locale(existing, entry, ReconcileOutcome::Merged).await;
        }

        if options.overwrite_existing {
            self.update_existing_row(existing, entry).await
        } else {
            Ok(ReconcileOutcome::Skipped(SkipReason::ExistingRow))
        }
    }

    /// Overwrite the locale of an existing row, if the row holds that locale
    ///
    /// A locale that the row does not already contain is never added here.
    pub async fn update_locale(&self, entry: &FlattenedTranslation) -> Result<ReconcileOutcome> {
        match self.store.find(&entry.group, &entry.key).await? {
            Some(existing) => self.update_existing_row(existing, entry).await,
            None => Ok(ReconcileOutcome::Skipped(SkipReason::MissingRow)),
        }
    }

    async fn create(&self, entry: &FlattenedTranslation) -> Result<ReconcileOutcome> {
        if entry.value.is_empty() {
            return Ok(ReconcileOutcome::Skipped(SkipReason::EmptyValue));
        }
        let row = TranslationRow::new(
            entry.group.clone(),
            entry.key.clone(),
            LocaleMap::single(entry.locale.clone(), entry.value.clone()),
        );
        self.store.insert(&row).await?;
        Ok(ReconcileOutcome::Created)
    }

    async fn update_existing_row(&self, existing: TranslationRow, entry: &FlattenedTranslation) -> Result<ReconcileOutcome> {
        if !existing.translations.contains(&entry.locale) {
            return Ok(ReconcileOutcome::Skipped(SkipReason::MissingLocale));
        }
        self.write_locale(existing, entry, ReconcileOutcome::Updated).await
    }

    async fn write_locale(
        &self,
        mut row: TranslationRow,
        entry: &FlattenedTranslation,
        outcome: ReconcileOutcome,
    ) -> Result<ReconcileOutcome> {
        row.translations.set(entry.locale.clone(), entry.value.clone());
        self.store
            .update_translations(&row.group, &row.key, &row.translations)
            .await?;
        Ok(outcome)
    }
}
