//! Translations importer
//!
//! Scans a directory tree of locale translation files, dots their nested keys
//! and reconciles them with a database translations table, creating missing
//! rows and optionally overwriting existing locales.

pub mod config;
pub mod database;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ImportError, Result};

// Re-export main components for easy access
pub use database::{MemoryTranslationStore, PgTranslationRepository, TranslationStore};
pub use services::{ImportOptions, ImportSummary, Importer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
