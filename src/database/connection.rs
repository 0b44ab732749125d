//! Database connection management
//!
//! An import is one sequential pass, so the pool rarely holds more than a
//! single live connection. Connections are not recycled during a run.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;
use crate::utils::errors::ImportError;

pub type DatabasePool = Pool<Postgres>;

/// Pool options resolved from the `database` settings section
///
/// `acquire_timeout` bounds how long a statement waits for a connection.
/// There is no idle timeout or maximum lifetime: the process exits when the
/// import finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from(&crate::config::Settings::default().database)
    }
}

impl From<&crate::config::DatabaseConfig> for DatabaseConfig {
    fn from(settings: &crate::config::DatabaseConfig) -> Self {
        Self {
            url: settings.url.clone(),
            max_connections: settings.max_connections,
            min_connections: settings.min_connections,
            acquire_timeout: Duration::from_secs(u64::from(settings.acquire_timeout_secs)),
        }
    }
}

/// Connect to the translations database and check it answers
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabasePool, ImportError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect(&config.url)
        .await?;

    health_check(&pool).await?;

    info!(max_connections = config.max_connections, "Connected to translations database");
    Ok(pool)
}

/// Create the default `language_lines` table if it is missing
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), ImportError> {
    info!("Applying translations table migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub async fn health_check(pool: &DatabasePool) -> Result<(), ImportError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_settings_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "postgres://localhost/translations");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_database_config_from_settings() {
        let settings = crate::config::DatabaseConfig {
            url: "postgres://db/app".to_string(),
            max_connections: 2,
            min_connections: 0,
            acquire_timeout_secs: 5,
        };
        let config = DatabaseConfig::from(&settings);
        assert_eq!(config.url, "postgres://db/app");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }
}
