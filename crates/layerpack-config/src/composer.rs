//! Mode-driven composition of the final build configuration.
//!
//! A run is a single linear pass:
//!
//! 1. build the base fragment from the project settings
//! 2. call the producers the mode selects, in their fixed order
//! 3. fold base and fragments together with [`merge_all`]
//! 4. apply the mode's output patches (path suffix, hashed names, public path)
//! 5. validate, returning a [`MergedConfig`] or the first error
//!
//! | mode        | producers after the base                                         |
//! |-------------|------------------------------------------------------------------|
//! | `default`   | `setup_css`, `setup_source_map`, `dev_server`                     |
//! | `build`     | `extract_css`, `clean`, `setup_source_map`                        |
//! | `buildProd` | `extract_bundle` (with vendor modules), `extract_css`, `clean`, `set_free_variable`, `minify` |
//!
//! Image and font rules are added in every mode when the project configures
//! their directories.

use indexmap::IndexMap;
use serde_json::json;
use std::path::{Path, PathBuf};

use crate::env::{ComposeEnv, PUBLIC_PATH_VAR};
use crate::error::{ConfigError, Result};
use crate::fragment::{
    merge_all, plugin_names, Fragment, MergedConfig, OutputSection, PluginDescriptor,
};
use crate::mode::Mode;
use crate::parts::{
    self, CleanOptions, DevServerOptions, ExtractBundleOptions, ExtractOptions, FontOptions,
    FreeVariableOptions, ImageOptions, SourceMapOptions, StyleOptions,
};
use crate::project::ProjectConfig;
use crate::validation;

pub const APP_ENTRY: &str = "app";
pub const STYLE_ENTRY: &str = "style";
pub const VENDOR_ENTRY: &str = "vendor";
pub const NODE_ENV_KEY: &str = "process.env.NODE_ENV";

const PLAIN_FILENAME: &str = "[name].js";
const HASHED_FILENAME: &str = "[name].[chunkhash].js";
const HASHED_CHUNK_FILENAME: &str = "[chunkhash].js";

/// Composes a [`MergedConfig`] for one project and one environment.
///
/// # Example
///
/// ```
/// use layerpack_config::{ComposeEnv, Composer, Mode, ProjectConfig};
///
/// let env = ComposeEnv {
///     mode: Mode::Build,
///     ..Default::default()
/// };
/// let config = Composer::new(ProjectConfig::default().with_root("/work"), env)
///     .compose()
///     .unwrap();
///
/// assert!(config.output.path.as_ref().unwrap().ends_with("build/dev"));
/// ```
#[derive(Debug, Clone)]
pub struct Composer {
    project: ProjectConfig,
    env: ComposeEnv,
}

impl Composer {
    pub fn new(project: ProjectConfig, env: ComposeEnv) -> Self {
        Self { project, env }
    }

    pub fn mode(&self) -> Mode {
        self.env.mode
    }

    /// Run the full pass: base, producers, merge, patches, validation.
    pub fn compose(&self) -> Result<MergedConfig> {
        let mode = self.env.mode;
        tracing::info!(%mode, "composing build configuration");

        let public_path = self.deploy_public_path()?;
        let fragments = self.fragments()?;
        tracing::debug!(count = fragments.len(), "produced fragments");

        let mut merged = merge_all(self.base(), fragments);
        self.patch(&mut merged, public_path);

        validation::validate(merged)
    }

    /// The fixed starting fragment: entries, output naming and the HTML page.
    pub fn base(&self) -> Fragment {
        let mut entry = IndexMap::new();
        entry.insert(
            APP_ENTRY.to_string(),
            vec![path_string(&self.project.resolve(&self.project.paths.app))],
        );
        if let Some(style) = &self.project.paths.style {
            entry.insert(
                STYLE_ENTRY.to_string(),
                vec![path_string(&self.project.resolve(style))],
            );
        }

        Fragment {
            entry,
            output: OutputSection {
                path: Some(self.project.resolve(&self.project.paths.build)),
                filename: Some(PLAIN_FILENAME.to_string()),
                ..Default::default()
            },
            plugins: vec![
                PluginDescriptor::new(plugin_names::HTML)
                    .arg(json!({ "title": self.project.title })),
            ],
            ..Default::default()
        }
    }

    /// Call the producers the mode selects, in order.
    pub fn fragments(&self) -> Result<Vec<Fragment>> {
        let mode = self.env.mode;
        let mut fragments = Vec::new();

        match mode {
            Mode::Default => {
                fragments.push(parts::setup_css(&StyleOptions::new(self.style_include()))?);
                fragments.push(parts::setup_source_map(&SourceMapOptions::default())?);
                fragments.push(parts::dev_server(&DevServerOptions {
                    host: self.env.host.clone(),
                    port: self.env.port,
                    ..Default::default()
                })?);
            }
            Mode::Build => {
                fragments.push(parts::extract_css(&ExtractOptions::new(self.style_include()))?);
                fragments.push(parts::clean(&self.clean_options())?);
                fragments.push(parts::setup_source_map(&SourceMapOptions::default())?);
            }
            Mode::BuildProd => {
                if !self.project.vendor.is_empty() {
                    fragments.push(parts::extract_bundle(&ExtractBundleOptions {
                        name: VENDOR_ENTRY.to_string(),
                        entries: self.project.vendor.clone(),
                    })?);
                }
                fragments.push(parts::extract_css(&ExtractOptions::new(self.style_include()))?);
                fragments.push(parts::clean(&self.clean_options())?);
                fragments.push(parts::set_free_variable(&FreeVariableOptions::new(
                    NODE_ENV_KEY,
                    "production",
                ))?);
                fragments.push(parts::minify(&self.project.minify)?);
            }
        }

        if let Some(images) = &self.project.paths.images {
            fragments.push(parts::setup_images(&ImageOptions::new([
                self.project.resolve(images)
            ]))?);
        }
        if let Some(fonts) = &self.project.paths.fonts {
            fragments.push(parts::setup_fonts(&FontOptions {
                include: vec![self.project.resolve(fonts)],
            })?);
        }

        Ok(fragments)
    }

    /// Output directory after the mode's suffix.
    pub fn build_dir(&self) -> PathBuf {
        let build = self.project.resolve(&self.project.paths.build);
        match self.env.mode.output_suffix() {
            Some(suffix) => build.join(suffix),
            None => build,
        }
    }

    // Mode-keyed edits applied after the generic merge.
    fn patch(&self, merged: &mut Fragment, public_path: Option<String>) {
        let mode = self.env.mode;
        if let Some(suffix) = mode.output_suffix() {
            merged.output.path = merged.output.path.take().map(|path| path.join(suffix));
        }
        if mode.is_build() {
            merged.output.filename = Some(HASHED_FILENAME.to_string());
            merged.output.chunk_filename = Some(HASHED_CHUNK_FILENAME.to_string());
        }
        if let Some(public_path) = public_path {
            merged.output.public_path = Some(public_path);
        }
    }

    fn deploy_public_path(&self) -> Result<Option<String>> {
        if !(self.env.deploy && self.env.mode.is_build()) {
            return Ok(None);
        }
        self.env
            .public_path
            .clone()
            .or_else(|| self.project.public_path.clone())
            .map(Some)
            .ok_or(ConfigError::MissingEnv(PUBLIC_PATH_VAR))
    }

    fn style_include(&self) -> Vec<PathBuf> {
        let mut include = vec![self.project.resolve(&self.project.paths.app)];
        if let Some(style) = &self.project.paths.style {
            include.push(self.project.resolve(style));
        }
        include
    }

    fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            path: self.build_dir(),
            root: self.project.root.clone(),
        }
    }
}

/// Compose in one call.
pub fn compose(project: ProjectConfig, env: ComposeEnv) -> Result<MergedConfig> {
    Composer::new(project, env).compose()
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
