//! Command-line interface definition for Layerpack.
//!
//! This module defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `layerpack compose` - Compose and write the configuration for a mode
//! - `layerpack check` - Validate an emitted configuration file
//! - `layerpack schema` - Print the JSON schema of a composed configuration

mod commands;
pub mod enums;
mod tests;

use clap::Parser;

pub use commands::{CheckArgs, Command, ComposeArgs, SchemaArgs};
pub use enums::*;

/// Layerpack - layered bundler configuration
#[derive(Parser, Debug)]
#[command(
    name = "layerpack",
    version,
    about = "Compose module-bundler configurations from layered fragments",
    long_about = "Layerpack builds a webpack-style configuration by merging small fragments\n\
                  (style rules, dev server, minification, ...) over a base, picking the\n\
                  fragments from the build mode, and validating the result."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows which fragments were produced and how the environment was read.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. Useful for logging to
    /// files or systems that don't support colored terminal output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
