//! Command implementations for the Probehunt CLI
//!
//! Each command is organized into its own module for better maintainability.

pub mod count;
pub mod probes;
pub mod search;
