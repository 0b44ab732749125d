//! Translation storage abstraction
//!
//! The importer only needs four row-level operations against the
//! translations table. `PgTranslationRepository` backs them with PostgreSQL,
//! `MemoryTranslationStore` keeps everything in process.

use std::collections::BTreeMap;
use std::sync::Mutex;
use crate::models::{LocaleMap, TranslationRow};
use crate::utils::errors::Result;

/// Row-level access to the translations table
#[allow(async_fn_in_trait)]
pub trait TranslationStore {
    /// Whether a row for `(group, key)` exists, without decoding its translations
    async fn exists(&self, group: &str, key: &str) -> Result<bool>;

    /// Find the row identified by `(group, key)`
    async fn find(&self, group: &str, key: &str) -> Result<Option<TranslationRow>>;

    /// Insert a new row
    async fn insert(&self, row: &TranslationRow) -> Result<()>;

    /// Replace the whole translations map of an existing row
    async fn update_translations(&self, group: &str, key: &str, translations: &LocaleMap) -> Result<()>;
}

impl<S: TranslationStore> TranslationStore for &S {
    async fn exists(&self, group: &str, key: &str) -> Result<bool> {
        (**self).exists(group, key).await
    }

    async fn find(&self, group: &str, key: &str) -> Result<Option<TranslationRow>> {
        (**self).find(group, key).await
    }

    async fn insert(&self, row: &TranslationRow) -> Result<()> {
        (**self).insert(row).await
    }

    async fn update_translations(&self, group: &str, key: &str, translations: &LocaleMap) -> Result<()> {
        (**self).update_translations(group, key, translations).await
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    rows: BTreeMap<(String, String), LocaleMap>,
    operations: usize,
}

/// In-process store, ordered by `(group, key)`
#[derive(Debug, Default)]
pub struct MemoryTranslationStore {
    state: Mutex<MemoryState>,
}

impl MemoryTranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `rows`; seeding does not count as operations
    pub fn with_rows(rows: impl IntoIterator<Item = TranslationRow>) -> Self {
        let store = Self::new();
        {
            let mut state = store.lock();
            for row in rows {
                state.rows.insert((row.group, row.key), row.translations);
            }
        }
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // a poisoned lock still holds consistent rows: every mutation is a single insert
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of all rows
    pub fn rows(&self) -> Vec<TranslationRow> {
        self.lock()
            .rows
            .iter()
            .map(|((group, key), translations)| TranslationRow::new(group, key, translations.clone()))
            .collect()
    }

    pub fn get(&self, group: &str, key: &str) -> Option<TranslationRow> {
        self.lock()
            .rows
            .get(&(group.to_string(), key.to_string()))
            .map(|translations| TranslationRow::new(group, key, translations.clone()))
    }

    /// Number of reads and writes issued so far
    pub fn operations(&self) -> usize {
        self.lock().operations
    }
}

impl TranslationStore for MemoryTranslationStore {
    async fn exists(&self, group: &str, key: &str) -> Result<bool> {
        let mut state = self.lock();
        state.operations += 1;
        Ok(state.rows.contains_key(&(group.to_string(), key.to_string())))
    }

    async fn find(&self, group: &str, key: &str) -> Result<Option<TranslationRow>> {
        let mut state = self.lock();
        state.operations += 1;
        Ok(state
            .rows
            .get(&(group.to_string(), key.to_string()))
            .map(|translations| TranslationRow::new(group, key, translations.clone())))
    }

    async fn insert(&self, row: &TranslationRow) -> Result<()> {
        let mut state = self.lock();
        state.operations += 1;
        state
            .rows
            .insert((row.group.clone(), row.key.clone()), row.translations.clone());
        Ok(())
    }

    async fn update_translations(&self, group: &str, key: &str, translations: &LocaleMap) -> Result<()> {
        let mut state = self.lock();
        state.operations += 1;
        // UPDATE ... WHERE semantics: a missing row is left alone
        if let Some(existing) = state.rows.get_mut(&(group.to_string(), key.to_string())) {
            *existing = translations.clone();
        }
        Ok(())
    }
}
