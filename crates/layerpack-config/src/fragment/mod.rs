//! Typed build-configuration fragments.
//!
//! A [`Fragment`] is a partial build configuration. Producers in
//! [`crate::parts`] each return one; the composer folds them together with
//! [`Merge`] and validates the result into a [`MergedConfig`].

mod loader;
pub mod merge;
mod plugin;
mod server;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::path::PathBuf;

pub use loader::LoaderRule;
pub use merge::{merge_all, Merge};
pub use plugin::{names as plugin_names, PluginDescriptor};
pub use server::{DevServerSection, WatchSection};

use merge::{append, overwrite, recurse};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Fragment {
    /// Entry chunk name to the modules it starts from
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub entry: IndexMap<String, Vec<String>>,

    #[serde(default, skip_serializing_if = "OutputSection::is_empty")]
    pub output: OutputSection,

    #[serde(default, skip_serializing_if = "ModuleSection::is_empty")]
    pub module: ModuleSection,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_options: Option<WatchSection>,

    /// Source map style, e.g. `eval-source-map`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,
}

impl Merge for Fragment {
    fn merge(&mut self, other: Self) {
        self.entry.merge(other.entry);
        self.output.merge(other.output);
        self.module.merge(other.module);
        append(&mut self.plugins, other.plugins);
        recurse(&mut self.dev_server, other.dev_server);
        recurse(&mut self.watch_options, other.watch_options);
        overwrite(&mut self.devtool, other.devtool);
    }
}

impl Fragment {
    pub fn plugin_names(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|p| p.name.as_str())
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugin_names().any(|p| p == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutputSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map_filename: Option<String>,
}

impl OutputSection {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Merge for OutputSection {
    fn merge(&mut self, other: Self) {
        overwrite(&mut self.path, other.path);
        overwrite(&mut self.filename, other.filename);
        overwrite(&mut self.chunk_filename, other.chunk_filename);
        overwrite(&mut self.public_path, other.public_path);
        overwrite(&mut self.source_map_filename, other.source_map_filename);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ModuleSection {
    #[serde(default)]
    pub loaders: Vec<LoaderRule>,
}

impl ModuleSection {
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl Merge for ModuleSection {
    fn merge(&mut self, other: Self) {
        append(&mut self.loaders, other.loaders);
    }
}

/// A fully merged, validated configuration ready for the build engine.
///
/// Only [`crate::validation::validate`] constructs one, so holding a
/// `MergedConfig` means validation has passed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MergedConfig(Fragment);

impl MergedConfig {
    pub(crate) fn new_unchecked(fragment: Fragment) -> Self {
        Self(fragment)
    }

    pub fn into_inner(self) -> Fragment {
        self.0
    }

    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(&self.0).map_err(|e| crate::ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

impl Deref for MergedConfig {
    type Target = Fragment;

    fn deref(&self) -> &Fragment {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_fields_are_omitted() {
        let value = serde_json::to_value(Fragment::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn keys_use_engine_names() {
        let fragment = Fragment {
            output: OutputSection {
                chunk_filename: Some("[chunkhash].js".into()),
                ..Default::default()
            },
            dev_server: Some(DevServerSection {
                history_api_fallback: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&fragment).unwrap();
        assert_eq!(value["output"]["chunkFilename"], json!("[chunkhash].js"));
        assert_eq!(value["devServer"]["historyApiFallback"], json!(true));
    }

    #[test]
    fn output_scalars_override_and_keep() {
        let mut base = OutputSection {
            path: Some("build".into()),
            filename: Some("[name].js".into()),
            ..Default::default()
        };
        base.merge(OutputSection {
            filename: Some("[name].[chunkhash].js".into()),
            ..Default::default()
        });

        assert_eq!(base.path, Some(PathBuf::from("build")));
        assert_eq!(base.filename.as_deref(), Some("[name].[chunkhash].js"));
    }
}
