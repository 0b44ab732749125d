//! Services module
//!
//! This module contains the business logic of the importer.

pub mod importer;

// Re-export commonly used services
pub use importer::{ImportOptions, ImportProgress, ImportSummary, Importer, ReconcileOutcome, SkipReason};
