//! Translation source directory scanner
//!
//! Walks `<lang_path>/<locale>/**/<group>.json` and records which locales
//! provide which group. No filtering happens here.
//!
//! The walk is synchronous: it runs once, before any group file is loaded
//! or any row is touched. Group files themselves are read with `tokio::fs`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path};
use tracing::debug;
use walkdir::WalkDir;
use crate::utils::errors::{ImportError, Result};

/// File extension of translation group files
pub const GROUP_EXTENSION: &str = "json";

/// Group name to the locales that provide it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleGroupTree {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl LocaleGroupTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `locale` provides `group`
    pub fn insert(&mut self, group: impl Into<String>, locale: impl Into<String>) {
        self.groups.entry(group.into()).or_default().insert(locale.into());
    }

    /// Groups in name order with their locales in code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.groups.iter().map(|(group, locales)| (group.as_str(), locales))
    }

    pub fn locales_for(&self, group: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(group)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Scan the source root and build the group/locale tree
pub fn scan_lang_directory(lang_path: &Path) -> Result<LocaleGroupTree> {
    if !lang_path.is_dir() {
        return Err(ImportError::SourceNotFound { path: lang_path.to_path_buf() });
    }

    let mut tree = LocaleGroupTree::new();

    let locales = WalkDir::new(lang_path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(&e.file_name().to_string_lossy()));

    for entry in locales {
        let entry = entry.map_err(walk_error)?;
        if !entry.file_type().is_dir() {
            debug!(path = %entry.path().display(), "Ignoring file outside of a locale directory");
            continue;
        }

        let locale = entry.file_name().to_string_lossy().into_owned();
        let locale_dir = entry.path();
        let walker = WalkDir::new(locale_dir)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(&e.file_name().to_string_lossy()));

        for file in walker {
            let file = file.map_err(walk_error)?;
            if !file.file_type().is_file() {
                continue;
            }
            if file.path().extension().and_then(|ext| ext.to_str()) != Some(GROUP_EXTENSION) {
                debug!(path = %file.path().display(), "Ignoring non-translation file");
                continue;
            }

            if let Some(group) = group_name(locale_dir, file.path()) {
                debug!(group = %group, locale = %locale, "Found translation group");
                tree.insert(group, locale.clone());
            }
        }
    }

    Ok(tree)
}

fn walk_error(error: walkdir::Error) -> ImportError {
    match error.into_io_error() {
        Some(io) => ImportError::Io(io),
        None => ImportError::Config("Filesystem loop in translation sources".to_string()),
    }
}

/// `admin/users.json` relative to the locale directory becomes `admin/users`
fn group_name(locale_dir: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(locale_dir).ok()?.with_extension("");
    let parts: Vec<String> = relative
        .components()
        .map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Option<_>>()?;

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
