//! Translation repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::config::{TableConfig, TranslationsColumnType};
use crate::database::store::TranslationStore;
use crate::models::{LocaleMap, TranslationRow};
use crate::utils::errors::{ImportError, Result};
use crate::utils::logging::log_database_operation;

/// Quote a validated identifier, keeping an optional schema prefix
fn quote_identifier(name: &str) -> String {
    name.split('.')
        .map(|part| format!("\"{}\"", part))
        .collect::<Vec<_>>()
        .join(".")
}

/// SQL statements for the configured table, built once
#[derive(Debug, Clone, PartialEq, Eq)]
struct Statements {
    exists: String,
    find: String,
    insert: String,
    update: String,
}

impl Statements {
    fn new(config: &TableConfig) -> Self {
        let table = quote_identifier(&config.table);
        let group = quote_identifier(&config.group);
        let key = quote_identifier(&config.key);
        let translations = quote_identifier(&config.translations);

        let encoded = |placeholder: &str| match config.translations_type {
            TranslationsColumnType::Text => placeholder.to_string(),
            TranslationsColumnType::Json => format!("CAST({} AS json)", placeholder),
            TranslationsColumnType::Jsonb => format!("CAST({} AS jsonb)", placeholder),
        };

        let exists = format!("SELECT 1 FROM {table} WHERE {key} = $1 AND {group} = $2 LIMIT 1");
        let find = format!(
            "SELECT CAST({translations} AS text) FROM {table} WHERE {key} = $1 AND {group} = $2 LIMIT 1"
        );

        let (insert, update) = if config.timestamps {
            (
                format!(
                    "INSERT INTO {table} ({group}, {key}, {translations}, \"created_at\", \"updated_at\") \
                     VALUES ($1, $2, {}, $4, $4)",
                    encoded("$3")
                ),
                format!(
                    "UPDATE {table} SET {translations} = {}, \"updated_at\" = $4 WHERE {key} = $2 AND {group} = $3",
                    encoded("$1")
                ),
            )
        } else {
            (
                format!(
                    "INSERT INTO {table} ({group}, {key}, {translations}) VALUES ($1, $2, {})",
                    encoded("$3")
                ),
                format!(
                    "UPDATE {table} SET {translations} = {} WHERE {key} = $2 AND {group} = $3",
                    encoded("$1")
                ),
            )
        };

        Self { exists, find, insert, update }
    }
}

#[derive(Clone)]
pub struct PgTranslationRepository {
    pool: PgPool,
    table: String,
    timestamps: bool,
    statements: Statements,
}

impl PgTranslationRepository {
    /// Create a repository for the configured table
    ///
    /// Table and column names must already have passed
    /// [`validate_table_config`](crate::config::validation::validate_table_config).
    pub fn new(pool: PgPool, config: &TableConfig) -> Self {
        Self {
            pool,
            table: config.table.clone(),
            timestamps: config.timestamps,
            statements: Statements::new(config),
        }
    }

    /// Count rows in the configured table
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM {}",
            quote_identifier(&self.table)
        ))
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}

impl TranslationStore for PgTranslationRepository {
    async fn exists(&self, group: &str, key: &str) -> Result<bool> {
        let found: Option<(i32,)> = sqlx::query_as(&self.statements.exists)
            .bind(key)
            .bind(group)
            .fetch_optional(&self.pool)
            .await?;

        log_database_operation("exists", &self.table, group, key);
        Ok(found.is_some())
    }

    async fn find(&self, group: &str, key: &str) -> Result<Option<TranslationRow>> {
        let raw: Option<(Option<String>,)> = sqlx::query_as(&self.statements.find)
            .bind(key)
            .bind(group)
            .fetch_optional(&self.pool)
            .await?;

        log_database_operation("select", &self.table, group, key);

        match raw {
            Some((text,)) => {
                let translations = LocaleMap::from_json(text.as_deref()).map_err(|e| {
                    ImportError::CorruptTranslations {
                        group: group.to_string(),
                        key: key.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(Some(TranslationRow::new(group, key, translations)))
            }
            None => Ok(None),
        }
    }

    async fn insert(&self, row: &TranslationRow) -> Result<()> {
        let mut query = sqlx::query(&self.statements.insert)
            .bind(&row.group)
            .bind(&row.key)
            .bind(row.translations.to_json()?);
        if self.timestamps {
            query = query.bind(Utc::now());
        }
        query.execute(&self.pool).await?;

        log_database_operation("insert", &self.table, &row.group, &row.key);
        Ok(())
    }

    async fn update_translations(&self, group: &str, key: &str, translations: &LocaleMap) -> Result<()> {
        let mut query = sqlx::query(&self.statements.update)
            .bind(translations.to_json()?)
            .bind(key)
            .bind(group);
        if self.timestamps {
            query = query.bind(Utc::now());
        }
        query.execute(&self.pool).await?;

        log_database_operation("update", &self.table, group, key);
        Ok(())
    }
}
