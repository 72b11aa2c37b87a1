use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fragment::{plugin_names, DevServerSection, Fragment, PluginDescriptor, WatchSection};
use crate::parts::helpers::{
    default_aggregate_timeout_ms, default_poll_ms, default_stats, default_true,
};
use crate::parts::ProducerOptions;

/// Development server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevServerOptions {
    /// Network interface; unset leaves the engine default (`localhost`)
    #[serde(default)]
    pub host: Option<String>,

    /// Port; unset leaves the engine default (8080)
    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default = "default_true")]
    pub hot: bool,

    #[serde(default = "default_true")]
    pub inline: bool,

    /// Serve `index.html` for unknown routes so history-API routing works
    #[serde(default = "default_true")]
    pub history_api_fallback: bool,

    #[serde(default = "default_stats")]
    pub stats: String,

    #[serde(default = "default_aggregate_timeout_ms")]
    pub aggregate_timeout_ms: u64,

    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            hot: true,
            inline: true,
            history_api_fallback: true,
            stats: default_stats(),
            aggregate_timeout_ms: default_aggregate_timeout_ms(),
            poll_ms: default_poll_ms(),
        }
    }
}

impl ProducerOptions for DevServerOptions {
    const PRODUCER: &'static str = "dev_server";
}

pub fn dev_server(options: &DevServerOptions) -> Result<Fragment> {
    // Installed regardless of `hot`; the server flag alone does not add it
    let plugins = vec![
        PluginDescriptor::new(plugin_names::HOT_MODULE_REPLACEMENT)
            .arg(serde_json::json!({ "multiStep": true })),
    ];

    Ok(Fragment {
        watch_options: Some(WatchSection {
            aggregate_timeout: Some(options.aggregate_timeout_ms),
            poll: Some(options.poll_ms),
        }),
        dev_server: Some(DevServerSection {
            history_api_fallback: Some(options.history_api_fallback),
            hot: Some(options.hot),
            inline: Some(options.inline),
            stats: Some(options.stats.clone()),
            host: options.host.clone().filter(|h| !h.is_empty()),
            port: options.port,
        }),
        plugins,
        ..Default::default()
    })
}
