use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fragment::{Fragment, OutputSection};
use crate::parts::helpers::{default_devtool, default_source_map_filename, require_non_empty};
use crate::parts::ProducerOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceMapOptions {
    #[serde(default = "default_devtool")]
    pub devtool: String,

    #[serde(default = "default_source_map_filename")]
    pub filename: String,
}

impl Default for SourceMapOptions {
    fn default() -> Self {
        Self {
            devtool: default_devtool(),
            filename: default_source_map_filename(),
        }
    }
}

impl ProducerOptions for SourceMapOptions {
    const PRODUCER: &'static str = "setup_source_map";

    fn validate(&self) -> Result<()> {
        require_non_empty(Self::PRODUCER, "devtool", &self.devtool)?;
        require_non_empty(Self::PRODUCER, "filename", &self.filename)
    }
}

pub fn setup_source_map(options: &SourceMapOptions) -> Result<Fragment> {
    options.validate()?;
    Ok(Fragment {
        devtool: Some(options.devtool.clone()),
        output: OutputSection {
            source_map_filename: Some(options.filename.clone()),
            ..Default::default()
        },
        ..Default::default()
    })
}
