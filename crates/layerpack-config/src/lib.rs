//! Layered composition of module-bundler configurations.
//!
//! Small producers in [`parts`] each return one typed [`Fragment`]. The
//! [`Composer`] picks the producers a [`Mode`] calls for, merges their
//! fragments over a base with explicit per-field rules (see
//! [`fragment::merge`]), applies the mode's output patches and validates the
//! result into a [`MergedConfig`].

pub mod composer;
pub mod env;
pub mod error;
pub mod fragment;
pub mod mode;
pub mod parts;
pub mod project;
pub mod validation;

// Re-export main types
pub use composer::{compose, Composer};
pub use env::ComposeEnv;
pub use error::*;
pub use fragment::{
    merge_all, DevServerSection, Fragment, LoaderRule, Merge, MergedConfig, ModuleSection,
    OutputSection, PluginDescriptor, WatchSection,
};
pub use mode::Mode;
pub use parts::ProducerOptions;
pub use project::{ProjectConfig, ProjectDiscovery, ProjectPaths};

// Re-export validation
pub use validation::{
    merged_config_schema, validate, validate_value, ConfigValidator, RuleValidator,
    SchemaValidator,
};
