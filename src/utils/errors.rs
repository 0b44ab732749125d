//! Error handling for the translations importer
//!
//! This module defines the error type shared by the scanner, the importer and
//! the persistence layer. Every variant is fatal for a run.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for import operations
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Translation source directory not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Invalid translation file {}: {reason}", path.display())]
    InvalidTranslationFile { path: PathBuf, reason: String },

    #[error("Stored translations for {group}.{key} cannot be decoded: {reason}")]
    CorruptTranslations { group: String, key: String, reason: String },
}

/// Result type alias for import operations
pub type Result<T> = std::result::Result<T, ImportError>;

impl ImportError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ImportError::Database(_) => ErrorSeverity::Critical,
            ImportError::Migration(_) => ErrorSeverity::Critical,
            ImportError::Settings(_) => ErrorSeverity::Critical,
            ImportError::Config(_) => ErrorSeverity::Critical,
            ImportError::CorruptTranslations { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
