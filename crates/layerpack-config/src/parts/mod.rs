//! Fragment producers.
//!
//! Each producer turns one options struct into one [`Fragment`]. Producers
//! are pure: they read nothing but their options, keep no state between
//! calls, and either return a complete fragment or fail with
//! [`ConfigError::InvalidOption`] naming the offending key.
//!
//! [`Fragment`]: crate::fragment::Fragment
//! [`ConfigError::InvalidOption`]: crate::error::ConfigError::InvalidOption

mod assets;
mod helpers;
mod optimize;
mod server;
mod source_map;
mod style;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ConfigError, Result};

pub use assets::{setup_fonts, setup_images, FontOptions, ImageOptions};
pub use optimize::{
    clean, extract_bundle, minify, set_free_variable, CleanOptions, ExtractBundleOptions,
    FreeVariableOptions, MinifyOptions,
};
pub use server::{dev_server, DevServerOptions};
pub use source_map::{setup_source_map, SourceMapOptions};
pub use style::{
    extract_css, extract_scss, purify_css, setup_css, setup_scss, ExtractOptions,
    ExtractScssOptions, PurifyOptions, ScssOptions, StyleOptions,
};

/// Options accepted by a producer.
///
/// `from_value` is the entry point for options that arrive as loose data
/// (a project file, an API payload); it reports missing or mistyped keys
/// against the producer that owns them.
pub trait ProducerOptions: DeserializeOwned {
    const PRODUCER: &'static str;

    /// Check constraints serde cannot express.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_value(value: Value) -> Result<Self> {
        let options: Self = serde_path_to_error::deserialize(value)
            .map_err(|e| ConfigError::from_options(Self::PRODUCER, e))?;
        options.validate()?;
        Ok(options)
    }
}
