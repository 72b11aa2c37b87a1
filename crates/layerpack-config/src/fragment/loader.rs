use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A module rule: which files it matches and which transforms run on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LoaderRule {
    /// Regular expression source matched against module file names
    pub test: String,

    /// Transform identifiers; the engine applies the rightmost first
    pub loaders: Vec<String>,

    /// Directories the rule is restricted to
    pub include: Vec<PathBuf>,

    /// Loader used when the extract plugin leaves a chunk in place.
    /// Set only on rules whose output is pulled into a separate file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<String>,
}

impl LoaderRule {
    pub fn new(
        test: impl Into<String>,
        loaders: impl IntoIterator<Item = impl Into<String>>,
        include: Vec<PathBuf>,
    ) -> Self {
        Self {
            test: test.into(),
            loaders: loaders.into_iter().map(Into::into).collect(),
            include,
            extract: None,
        }
    }

    pub fn extracted(mut self, fallback: impl Into<String>) -> Self {
        self.extract = Some(fallback.into());
        self
    }
}
