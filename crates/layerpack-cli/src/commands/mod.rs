//! Command implementations for the Layerpack CLI.
//!
//! - [`compose`] - Compose and write the configuration for a mode
//! - [`check`] - Validate an emitted configuration file
//! - [`schema`] - Print the configuration schema
//!
//! Each command provides an `execute` function that takes the parsed
//! command arguments and returns a Result.

pub mod check;
pub mod compose;
pub mod schema;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use compose::execute as compose_execute;
pub use schema::execute as schema_execute;
