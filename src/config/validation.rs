//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured. Table and column
//! names end up interpolated into SQL, so they are restricted to plain
//! identifiers here.

use std::sync::OnceLock;
use regex::Regex;
use crate::utils::errors::{ImportError, Result};
use super::Settings;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
    })
}

/// Check that `name` is a plain SQL identifier
pub fn is_valid_identifier(name: &str) -> bool {
    identifier_pattern().is_match(name)
}

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_database_config(&settings.database)?;
    validate_source_config(&settings.source)?;
    validate_table_config(&settings.table)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(ImportError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(ImportError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(ImportError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    if config.acquire_timeout_secs == 0 {
        return Err(ImportError::Config(
            "Acquire timeout must be at least one second".to_string()
        ));
    }

    Ok(())
}

/// Validate translation source configuration
fn validate_source_config(config: &super::SourceConfig) -> Result<()> {
    if config.lang_path.is_empty() {
        return Err(ImportError::Config(
            "Translation source path is required".to_string()
        ));
    }

    if config.key_separator.is_empty() {
        return Err(ImportError::Config(
            "Key separator cannot be empty".to_string()
        ));
    }

    Ok(())
}

/// Validate table and column names
pub fn validate_table_config(config: &super::TableConfig) -> Result<()> {
    // schema-qualified table names are allowed
    let table_parts: Vec<&str> = config.table.split('.').collect();
    if table_parts.len() > 2 || !table_parts.iter().all(|part| is_valid_identifier(part)) {
        return Err(ImportError::Config(
            format!("Invalid table name: {:?}", config.table)
        ));
    }

    let columns = [
        ("group", &config.group),
        ("key", &config.key),
        ("translations", &config.translations),
    ];
    for (role, column) in columns {
        if !is_valid_identifier(column) {
            return Err(ImportError::Config(
                format!("Invalid {} column name: {:?}", role, column)
            ));
        }
    }

    let mut names = vec![&config.group, &config.key, &config.translations];
    names.sort();
    names.dedup();
    if names.len() != 3 {
        return Err(ImportError::Config(
            "Group, key and translations columns must be distinct".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ImportError::Config(
            "Log level is required".to_string()
        ));
    }

    if !VALID_LEVELS.contains(&config.level.as_str()) {
        return Err(ImportError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, VALID_LEVELS)
        ));
    }

    Ok(())
}
