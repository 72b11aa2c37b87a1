//! Development server and file watching sections of a fragment.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::merge::{overwrite, Merge};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DevServerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_api_fallback: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<String>,

    /// Absent means the engine picks its own interface (`localhost`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Absent means the engine picks its own port (8080)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl Merge for DevServerSection {
    fn merge(&mut self, other: Self) {
        overwrite(&mut self.history_api_fallback, other.history_api_fallback);
        overwrite(&mut self.hot, other.hot);
        overwrite(&mut self.inline, other.inline);
        overwrite(&mut self.stats, other.stats);
        overwrite(&mut self.host, other.host);
        overwrite(&mut self.port, other.port);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WatchSection {
    /// Delay before rebuilding after the first change (ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_timeout: Option<u64>,

    /// Polling interval (ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<u64>,
}

impl Merge for WatchSection {
    fn merge(&mut self, other: Self) {
        overwrite(&mut self.aggregate_timeout, other.aggregate_timeout);
        overwrite(&mut self.poll, other.poll);
    }
}
