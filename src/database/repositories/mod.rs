//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod translation;

// Re-export repositories
pub use translation::PgTranslationRepository;
