//! Layerpack CLI - compose module-bundler configurations from the terminal.
//!
//! This crate wraps [`layerpack_config`] in a command-line interface with
//! actionable error messages.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `compose`, `check` and `schema`
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages and the composition summary
//!
//! # Example
//!
//! ```rust
//! use layerpack_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

// Public modules
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt};
