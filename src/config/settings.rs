//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from configuration files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Environment prefix, e.g. `TRANSLATIONS_IMPORT_DATABASE__URL`
pub const ENV_PREFIX: &str = "TRANSLATIONS_IMPORT";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub source: SourceConfig,
    pub table: TableConfig,
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Seconds to wait for a free connection before giving up
    pub acquire_timeout_secs: u32,
}

/// Location and shape of the translation sources
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Root directory holding one sub-directory per locale
    pub lang_path: String,
    /// Separator used when dotting nested keys
    pub key_separator: String,
}

/// Target table and column names
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TableConfig {
    pub table: String,
    pub group: String,
    pub key: String,
    pub translations: String,
    pub translations_type: TranslationsColumnType,
    /// Maintain `created_at` / `updated_at` columns
    pub timestamps: bool,
}

/// SQL type of the translations column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationsColumnType {
    Text,
    Json,
    Jsonb,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for a daily rolling log file; stderr only when unset
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from the default `config` file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Load settings, reading `path` instead of the optional `config` file
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let database_url = std::env::var("DATABASE_URL").unwrap_or(defaults.database.url);

        let mut builder = config::Config::builder()
            .set_default("database.url", database_url)?
            .set_default("database.max_connections", i64::from(defaults.database.max_connections))?
            .set_default("database.min_connections", i64::from(defaults.database.min_connections))?
            .set_default("database.acquire_timeout_secs", i64::from(defaults.database.acquire_timeout_secs))?
            .set_default("source.lang_path", defaults.source.lang_path)?
            .set_default("source.key_separator", defaults.source.key_separator)?
            .set_default("table.table", defaults.table.table)?
            .set_default("table.group", defaults.table.group)?
            .set_default("table.key", defaults.table.key)?
            .set_default("table.translations", defaults.table.translations)?
            .set_default("table.translations_type", "jsonb")?
            .set_default("table.timestamps", defaults.table.timestamps)?
            .set_default("logging.level", defaults.logging.level)?;

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name("config").required(false)),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::ImportError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "postgres://localhost/translations".to_string(),
                max_connections: 10,
                min_connections: 1,
                acquire_timeout_secs: 30,
            },
            source: SourceConfig::default(),
            table: TableConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            lang_path: "lang".to_string(),
            key_separator: ".".to_string(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table: "language_lines".to_string(),
            group: "group".to_string(),
            key: "key".to_string(),
            translations: "text".to_string(),
            translations_type: TranslationsColumnType::Jsonb,
            timestamps: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for (name, _) in std::env::vars() {
            if name.starts_with(ENV_PREFIX) || name == "DATABASE_URL" {
                std::env::remove_var(name);
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_config_file() {
        clear_env();
        let settings = Settings::load(None).unwrap();

        assert_eq!(settings.database.url, "postgres://localhost/translations");
        assert_eq!(settings.database.acquire_timeout_secs, 30);
        assert_eq!(settings.source.lang_path, "lang");
        assert_eq!(settings.source.key_separator, ".");
        assert_eq!(settings.table.table, "language_lines");
        assert_eq!(settings.table.translations, "text");
        assert_eq!(settings.table.translations_type, TranslationsColumnType::Jsonb);
        assert!(!settings.table.timestamps);
        assert!(settings.logging.file_path.is_none());
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://db/app");
        std::env::set_var("TRANSLATIONS_IMPORT_TABLE__TABLE", "translations");
        std::env::set_var("TRANSLATIONS_IMPORT_TABLE__TIMESTAMPS", "true");
        std::env::set_var("TRANSLATIONS_IMPORT_DATABASE__MAX_CONNECTIONS", "3");

        let settings = Settings::load(None).unwrap();
        clear_env();

        assert_eq!(settings.database.url, "postgres://db/app");
        assert_eq!(settings.database.max_connections, 3);
        assert_eq!(settings.table.table, "translations");
        assert!(settings.table.timestamps);
    }

    #[test]
    #[serial]
    fn test_explicit_config_file() {
        clear_env();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[source]
lang_path = "resources/lang"

[table]
translations = "translations"
translations_type = "text"
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.source.lang_path, "resources/lang");
        assert_eq!(settings.table.translations, "translations");
        assert_eq!(settings.table.translations_type, TranslationsColumnType::Text);
        assert_eq!(settings.table.key, "key");
    }

    #[test]
    #[serial]
    fn test_missing_explicit_config_file_is_an_error() {
        clear_env();
        let result = Settings::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }
}
