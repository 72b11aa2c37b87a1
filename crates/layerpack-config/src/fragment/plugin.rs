use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Engine plugin identifiers emitted by the built-in producers.
pub mod names {
    pub const HTML: &str = "html-webpack-plugin";
    pub const HOT_MODULE_REPLACEMENT: &str = "webpack.HotModuleReplacementPlugin";
    pub const UGLIFY_JS: &str = "webpack.optimize.UglifyJsPlugin";
    pub const DEFINE: &str = "webpack.DefinePlugin";
    pub const COMMONS_CHUNK: &str = "webpack.optimize.CommonsChunkPlugin";
    pub const CLEAN: &str = "clean-webpack-plugin";
    pub const EXTRACT_TEXT: &str = "extract-text-webpack-plugin";
    pub const PURIFY_CSS: &str = "purifycss-webpack-plugin";
}

/// A named build-engine extension.
///
/// Composition never looks inside `args`; descriptors are only collected
/// into the plugin list in merge order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PluginDescriptor {
    pub name: String,

    /// Positional constructor arguments, passed to the plugin verbatim
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, value: Value) -> Self {
        self.args.push(value);
        self
    }
}
