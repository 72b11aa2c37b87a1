//! Error handling for the Layerpack CLI.
//!
//! Composition failures come from [`layerpack_config::ConfigError`]; the CLI
//! wraps them together with its own file and JSON failures in
//! [`CliError`], and [`cli_error_to_miette`] turns the result into a report
//! for the terminal.
//!
//! # Example
//!
//! ```rust,no_run
//! use layerpack_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_config(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

use std::path::PathBuf;

use layerpack_config::ConfigError;
use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Composition, discovery or validation failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Report a missing file as [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }
}

/// Convert a CLI error to a miette report, attaching a hint where one helps.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Run 'layerpack compose' first or pass the file to check",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a composition error to a miette report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::MissingEnv(var) => miette::miette!(
            help = format!("Set {var}, or set public_path in layerpack.toml"),
            "{}",
            ConfigError::MissingEnv(var)
        ),
        ConfigError::InvalidEnv { var, value, hint } => miette::miette!(
            help = hint,
            "Invalid value for {}: '{}'",
            var,
            value
        ),
        ConfigError::SchemaValidation { key, message } => miette::miette!(
            help = "Producers only emit known keys; check fragments added by hand",
            "Configuration rejected at '{}': {}",
            key,
            message
        ),
        ConfigError::NoEntries => miette::miette!(
            help = "Set paths.app in layerpack.toml",
            "{}",
            ConfigError::NoEntries
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}
