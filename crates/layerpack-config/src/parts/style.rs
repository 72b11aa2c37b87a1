//! Style sheet handling: inline (`style` loader) or extracted to files.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;

use crate::error::Result;
use crate::fragment::{plugin_names, Fragment, LoaderRule, ModuleSection, PluginDescriptor};
use crate::parts::helpers::{default_extract_filename, require_include, require_non_empty};
use crate::parts::ProducerOptions;

const CSS_TEST: &str = r"\.css$";
const SCSS_TEST: &str = r"\.scss$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleOptions {
    /// Directories whose style sheets the rule applies to (required)
    pub include: Vec<PathBuf>,
}

impl StyleOptions {
    pub fn new(include: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            include: include.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProducerOptions for StyleOptions {
    const PRODUCER: &'static str = "setup_css";

    fn validate(&self) -> Result<()> {
        require_include(Self::PRODUCER, &self.include)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractOptions {
    pub include: Vec<PathBuf>,

    /// Name template of the extracted style sheet
    #[serde(default = "default_extract_filename")]
    pub filename: String,

    /// Also extract styles from async chunks
    #[serde(default)]
    pub all_chunks: bool,
}

impl ExtractOptions {
    pub fn new(include: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            filename: default_extract_filename(),
            all_chunks: false,
        }
    }
}

impl ProducerOptions for ExtractOptions {
    const PRODUCER: &'static str = "extract_css";

    fn validate(&self) -> Result<()> {
        require_include(Self::PRODUCER, &self.include)?;
        require_non_empty(Self::PRODUCER, "filename", &self.filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScssOptions {
    pub include: Vec<PathBuf>,
}

impl ScssOptions {
    pub fn new(include: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            include: include.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProducerOptions for ScssOptions {
    const PRODUCER: &'static str = "setup_scss";

    fn validate(&self) -> Result<()> {
        require_include(Self::PRODUCER, &self.include)
    }
}

/// Extracted `.scss` always gathers from every chunk, so there is no
/// `all_chunks` switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractScssOptions {
    pub include: Vec<PathBuf>,

    #[serde(default = "default_extract_filename")]
    pub filename: String,
}

impl ExtractScssOptions {
    pub fn new(include: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            filename: default_extract_filename(),
        }
    }
}

impl ProducerOptions for ExtractScssOptions {
    const PRODUCER: &'static str = "extract_scss";

    fn validate(&self) -> Result<()> {
        require_include(Self::PRODUCER, &self.include)?;
        require_non_empty(Self::PRODUCER, "filename", &self.filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PurifyOptions {
    /// Root the purifier resolves `paths` against
    pub base_path: PathBuf,

    /// Files or globs not visible to the engine that reference class names
    pub paths: Vec<String>,
}

impl ProducerOptions for PurifyOptions {
    const PRODUCER: &'static str = "purify_css";

    fn validate(&self) -> Result<()> {
        if self.paths.is_empty() {
            return Err(crate::ConfigError::invalid_option(
                Self::PRODUCER,
                "paths",
                "list the files that reference style classes",
            ));
        }
        Ok(())
    }
}

fn rule_fragment(rule: LoaderRule) -> Fragment {
    Fragment {
        module: ModuleSection {
            loaders: vec![rule],
        },
        ..Default::default()
    }
}

fn extract_plugin(filename: &str, all_chunks: bool) -> PluginDescriptor {
    let plugin = PluginDescriptor::new(plugin_names::EXTRACT_TEXT).arg(json!(filename));
    if all_chunks {
        plugin.arg(json!({ "allChunks": true }))
    } else {
        plugin
    }
}

/// Bundle `.css` files into the script via `style` and `css` loaders.
pub fn setup_css(options: &StyleOptions) -> Result<Fragment> {
    options.validate()?;
    Ok(rule_fragment(LoaderRule::new(
        CSS_TEST,
        ["style", "css"],
        options.include.clone(),
    )))
}

/// Like [`setup_css`], with `sass` compiling `.scss` first.
pub fn setup_scss(options: &ScssOptions) -> Result<Fragment> {
    options.validate()?;
    Ok(rule_fragment(LoaderRule::new(
        SCSS_TEST,
        ["style", "css", "sass"],
        options.include.clone(),
    )))
}

/// Pull `.css` out of the script bundle into its own file.
pub fn extract_css(options: &ExtractOptions) -> Result<Fragment> {
    options.validate()?;
    let mut fragment = rule_fragment(
        LoaderRule::new(CSS_TEST, ["css"], options.include.clone()).extracted("style"),
    );
    fragment.plugins.push(extract_plugin(&options.filename, options.all_chunks));
    Ok(fragment)
}

/// Pull compiled `.scss` out into its own file, gathering from every chunk.
pub fn extract_scss(options: &ExtractScssOptions) -> Result<Fragment> {
    options.validate()?;
    let mut fragment = rule_fragment(
        LoaderRule::new(SCSS_TEST, ["css", "sass"], options.include.clone()).extracted("style"),
    );
    fragment.plugins.push(extract_plugin(&options.filename, true));
    Ok(fragment)
}

/// Drop style rules no file in `paths` references.
pub fn purify_css(options: &PurifyOptions) -> Result<Fragment> {
    options.validate()?;
    Ok(Fragment {
        plugins: vec![
            PluginDescriptor::new(plugin_names::PURIFY_CSS).arg(json!({
                "basePath": options.base_path,
                "paths": options.paths,
            })),
        ],
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    #[test]
    fn css_rule_is_scoped_to_include() {
        let fragment = setup_css(&StyleOptions::new(["app"])).unwrap();
        let rule = &fragment.module.loaders[0];
        assert_eq!(rule.include, vec![PathBuf::from("app")]);
        assert_eq!(rule.loaders, vec!["style", "css"]);
        assert!(fragment.plugins.is_empty());
    }

    #[test]
    fn empty_include_is_rejected() {
        let err = setup_css(&StyleOptions { include: vec![] }).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOption { ref key, .. } if key == "include"
        ));
    }

    #[test]
    fn extract_scss_stays_scoped() {
        let fragment = extract_scss(&ExtractScssOptions::new(["app/styles"])).unwrap();
        let rule = &fragment.module.loaders[0];
        assert_eq!(rule.include, vec![PathBuf::from("app/styles")]);
        assert_eq!(rule.extract.as_deref(), Some("style"));
        assert_eq!(fragment.plugins[0].args[1], json!({ "allChunks": true }));
    }

    #[test]
    fn scss_errors_name_their_own_producer() {
        let err = setup_scss(&ScssOptions { include: vec![] }).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOption { producer: "setup_scss", ref key, .. } if key == "include"
        ));

        let err = ExtractScssOptions::from_value(json!({ "include": [] })).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOption { producer: "extract_scss", .. }
        ));
    }

    #[test]
    fn extract_scss_rejects_empty_filename() {
        let options = ExtractScssOptions {
            include: vec![PathBuf::from("app")],
            filename: String::new(),
        };
        let err = extract_scss(&options).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOption { producer: "extract_scss", ref key, .. } if key == "filename"
        ));
    }

    #[test]
    fn extract_css_installs_one_plugin() {
        let fragment = extract_css(&ExtractOptions::new(["app"])).unwrap();
        assert_eq!(fragment.plugins.len(), 1);
        assert_eq!(fragment.plugins[0].name, plugin_names::EXTRACT_TEXT);
        assert_eq!(fragment.plugins[0].args, vec![json!("[name].[chunkhash].css")]);
    }

    #[test]
    fn purify_requires_paths() {
        let options = PurifyOptions {
            base_path: PathBuf::from("/project"),
            paths: vec![],
        };
        assert!(purify_css(&options).is_err());
    }
}
