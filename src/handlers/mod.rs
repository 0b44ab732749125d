//! Command line handlers module
//!
//! This module contains the command handlers and the console they use to
//! talk to the operator.

pub mod commands;
pub mod console;

// Re-export commonly used handler types
pub use commands::{handle_command, Command};
pub use console::Console;
