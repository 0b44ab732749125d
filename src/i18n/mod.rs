//! Translation sources module
//!
//! Scans the locale directory tree, loads group files and dots their nested
//! keys into flat translation entries.

pub mod loader;
pub mod scanner;

// Re-export commonly used i18n components
pub use loader::{dot, flatten_group, load_group};
pub use scanner::{scan_lang_directory, LocaleGroupTree};
