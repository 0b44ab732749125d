//! Logging configuration and setup
//!
//! Structured events go to stderr (and optionally a rolling file) so that the
//! operator-facing progress lines on stdout stay readable.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::utils::errors::{ImportError, Result};

/// Initialize logging based on configuration
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// must be held until the end of `main`, otherwise buffered file output is lost.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ImportError::Config(format!("Invalid log filter: {}", e)))?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "translations-import.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ImportError::Config(format!("Logging already initialized: {}", e)))?;

    debug!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the outcome of a finished import run
pub fn log_import_summary(summary: &crate::services::ImportSummary) {
    info!(
        created = summary.created,
        updated = summary.updated,
        merged = summary.merged,
        skipped_existing = summary.skipped_existing,
        skipped_empty = summary.skipped_empty,
        skipped_missing_locale = summary.skipped_missing_locale,
        "Import finished"
    );

    if summary.skipped_missing_locale > 0 {
        warn!(
            count = summary.skipped_missing_locale,
            "Some locales were not written because the existing rows do not contain them; \
             rerun with --merge-new-locales to add them"
        );
    }
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, group: &str, key: &str) {
    debug!(
        operation = operation,
        table = table,
        group = group,
        key = key,
        "Database operation completed"
    );
}
