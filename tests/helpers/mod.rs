//! Test helpers module
//!
//! Utilities shared by the integration tests: temporary translation source
//! trees and a PostgreSQL test database.

pub mod database_helper;
pub mod lang_fixture;

#[allow(unused_imports)]
pub use database_helper::*;
#[allow(unused_imports)]
pub use lang_fixture::*;
