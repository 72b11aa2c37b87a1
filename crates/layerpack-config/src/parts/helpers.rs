use std::path::PathBuf;

use crate::error::{ConfigError, Result};

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_stats() -> String {
    "errors-only".to_string()
}

pub(crate) fn default_aggregate_timeout_ms() -> u64 {
    300
}

pub(crate) fn default_poll_ms() -> u64 {
    1000
}

pub(crate) fn default_devtool() -> String {
    "eval-source-map".to_string()
}

pub(crate) fn default_source_map_filename() -> String {
    "[file].map".to_string()
}

pub(crate) fn default_extract_filename() -> String {
    "[name].[chunkhash].css".to_string()
}

pub(crate) fn default_image_name() -> String {
    "[path][name].[hash].[ext]".to_string()
}

pub(crate) fn default_mangle_except() -> Vec<String> {
    vec!["$".to_string(), "webpackJsonp".to_string()]
}

/// Rules must be scoped; an empty include set would match every file.
pub(crate) fn require_include(producer: &'static str, include: &[PathBuf]) -> Result<()> {
    if include.is_empty() {
        return Err(ConfigError::invalid_option(
            producer,
            "include",
            "provide at least one directory to scope the rule to",
        ));
    }
    if include.iter().any(|p| p.as_os_str().is_empty()) {
        return Err(ConfigError::invalid_option(
            producer,
            "include",
            "include paths cannot be empty",
        ));
    }
    Ok(())
}

pub(crate) fn require_non_empty(producer: &'static str, key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid_option(
            producer,
            key,
            format!("'{key}' cannot be empty"),
        ));
    }
    Ok(())
}
