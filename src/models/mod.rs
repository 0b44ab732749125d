//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod translation;

// Re-export commonly used models
pub use translation::{FlattenedTranslation, LocaleMap, TranslationRow};
