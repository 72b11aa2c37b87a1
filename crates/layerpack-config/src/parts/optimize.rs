//! Production-oriented producers: minification, constants, chunk splitting
//! and output cleanup.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::fragment::{plugin_names, Fragment, PluginDescriptor};
use crate::parts::helpers::{default_mangle_except, default_true, require_non_empty};
use crate::parts::ProducerOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinifyOptions {
    /// Keep the output readable
    #[serde(default)]
    pub beautify: bool,

    /// Keep comments
    #[serde(default)]
    pub comments: bool,

    #[serde(default)]
    pub compress_warnings: bool,

    #[serde(default)]
    pub drop_console: bool,

    /// Identifiers the mangler must leave alone
    #[serde(default = "default_mangle_except")]
    pub mangle_except: Vec<String>,

    #[serde(default = "default_true")]
    pub screw_ie8: bool,

    #[serde(default = "default_true")]
    pub keep_fnames: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            beautify: false,
            comments: false,
            compress_warnings: false,
            drop_console: false,
            mangle_except: default_mangle_except(),
            screw_ie8: true,
            keep_fnames: true,
        }
    }
}

impl ProducerOptions for MinifyOptions {
    const PRODUCER: &'static str = "minify";
}

pub fn minify(options: &MinifyOptions) -> Result<Fragment> {
    let plugin = PluginDescriptor::new(plugin_names::UGLIFY_JS).arg(json!({
        "beautify": options.beautify,
        "comments": options.comments,
        "compress": {
            "warnings": options.compress_warnings,
            "drop_console": options.drop_console,
        },
        "mangle": {
            "except": options.mangle_except,
            "screw_ie8": options.screw_ie8,
            "keep_fnames": options.keep_fnames,
        },
    }));

    Ok(Fragment {
        plugins: vec![plugin],
        ..Default::default()
    })
}

/// A compile-time constant replaced in the bundled code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FreeVariableOptions {
    /// Expression to replace, e.g. `process.env.NODE_ENV`
    pub key: String,

    /// Replacement; injected as a JSON string literal
    pub value: String,
}

impl FreeVariableOptions {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl ProducerOptions for FreeVariableOptions {
    const PRODUCER: &'static str = "set_free_variable";

    fn validate(&self) -> Result<()> {
        require_non_empty(Self::PRODUCER, "key", &self.key)
    }
}

pub fn set_free_variable(options: &FreeVariableOptions) -> Result<Fragment> {
    options.validate()?;
    let literal = serde_json::to_string(&options.value).map_err(|e| {
        ConfigError::invalid_option(FreeVariableOptions::PRODUCER, "value", e.to_string())
    })?;

    let mut definitions = IndexMap::new();
    definitions.insert(options.key.clone(), literal);

    Ok(Fragment {
        plugins: vec![PluginDescriptor::new(plugin_names::DEFINE).arg(json!(definitions))],
        ..Default::default()
    })
}

/// Split dependencies into their own chunk plus a manifest chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractBundleOptions {
    /// Chunk name; there is no default
    pub name: String,

    /// Modules that make up the chunk
    pub entries: Vec<String>,
}

impl ProducerOptions for ExtractBundleOptions {
    const PRODUCER: &'static str = "extract_bundle";

    fn validate(&self) -> Result<()> {
        require_non_empty(Self::PRODUCER, "name", &self.name)?;
        if self.entries.is_empty() {
            return Err(ConfigError::invalid_option(
                Self::PRODUCER,
                "entries",
                "list the modules to move into the chunk",
            ));
        }
        Ok(())
    }
}

pub fn extract_bundle(options: &ExtractBundleOptions) -> Result<Fragment> {
    options.validate()?;

    let mut entry = IndexMap::new();
    entry.insert(options.name.clone(), options.entries.clone());

    Ok(Fragment {
        entry,
        plugins: vec![
            // The manifest chunk keeps the vendor hash stable across app changes
            PluginDescriptor::new(plugin_names::COMMONS_CHUNK)
                .arg(json!({ "names": [options.name, "manifest"] })),
        ],
        ..Default::default()
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleanOptions {
    /// Directory to empty before building
    pub path: PathBuf,

    /// Project root the plugin resolves `path` against
    pub root: PathBuf,
}

impl ProducerOptions for CleanOptions {
    const PRODUCER: &'static str = "clean";

    fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::invalid_option(
                Self::PRODUCER,
                "path",
                "refusing to clean an empty path",
            ));
        }
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::invalid_option(
                Self::PRODUCER,
                "root",
                "the plugin needs the project root",
            ));
        }
        Ok(())
    }
}

pub fn clean(options: &CleanOptions) -> Result<Fragment> {
    options.validate()?;
    Ok(Fragment {
        plugins: vec![
            PluginDescriptor::new(plugin_names::CLEAN)
                .arg(json!([options.path]))
                .arg(json!({ "root": options.root })),
        ],
        ..Default::default()
    })
}
