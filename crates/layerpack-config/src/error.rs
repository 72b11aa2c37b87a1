//! Error types for fragment production, composition and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Producer boundary errors
    #[error("invalid option '{key}' for {producer}: {hint}")]
    InvalidOption {
        producer: &'static str,
        key: String,
        hint: String,
    },

    // Merged configuration errors
    #[error("no entries specified")]
    NoEntries,

    #[error("schema validation failed at '{key}': {message}")]
    SchemaValidation { key: String, message: String },

    // Environment errors
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("invalid value '{value}' for environment variable {var}: {hint}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        hint: String,
    },

    // Project file loading errors
    #[error("project config not found in {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid_option(
        producer: &'static str,
        key: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidOption {
            producer,
            key: key.into(),
            hint: hint.into(),
        }
    }

    /// Map a serde error raised while reading producer options.
    ///
    /// Type mismatches carry the path of the offending value. Missing and
    /// unknown fields are reported at the enclosing struct, so the field
    /// name is pulled out of serde's "missing field `name`" message instead.
    pub(crate) fn from_options(
        producer: &'static str,
        err: serde_path_to_error::Error<serde_json::Error>,
    ) -> Self {
        let path = err.path().to_string();
        let message = err.into_inner().to_string();
        let key = match (path.as_str(), message.split('`').nth(1)) {
            (".", Some(field)) => field.to_string(),
            (".", None) => "options".to_string(),
            _ => path,
        };
        ConfigError::InvalidOption {
            producer,
            key,
            hint: message,
        }
    }
}
