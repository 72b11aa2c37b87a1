use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;
use crate::fragment::{Fragment, LoaderRule, ModuleSection};
use crate::parts::helpers::{default_image_name, require_include, require_non_empty};
use crate::parts::ProducerOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageOptions {
    pub include: Vec<PathBuf>,

    /// Emitted file name; the content hash keeps long-lived caches valid
    #[serde(default = "default_image_name")]
    pub name: String,
}

impl ImageOptions {
    pub fn new(include: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            name: default_image_name(),
        }
    }
}

impl ProducerOptions for ImageOptions {
    const PRODUCER: &'static str = "setup_images";

    fn validate(&self) -> Result<()> {
        require_include(Self::PRODUCER, &self.include)?;
        require_non_empty(Self::PRODUCER, "name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontOptions {
    pub include: Vec<PathBuf>,
}

impl ProducerOptions for FontOptions {
    const PRODUCER: &'static str = "setup_fonts";

    fn validate(&self) -> Result<()> {
        require_include(Self::PRODUCER, &self.include)
    }
}

pub fn setup_images(options: &ImageOptions) -> Result<Fragment> {
    options.validate()?;
    let loader = format!("file?name={}", options.name);
    Ok(Fragment {
        module: ModuleSection {
            loaders: vec![LoaderRule::new(
                r"\.(jpg|png|gif)$",
                [loader],
                options.include.clone(),
            )],
        },
        ..Default::default()
    })
}

pub fn setup_fonts(options: &FontOptions) -> Result<Fragment> {
    options.validate()?;
    Ok(Fragment {
        module: ModuleSection {
            loaders: vec![LoaderRule::new(
                r"\.ttf$",
                ["file"],
                options.include.clone(),
            )],
        },
        ..Default::default()
    })
}
