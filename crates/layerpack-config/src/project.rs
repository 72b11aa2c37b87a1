//! Project settings and their discovery.
//!
//! Project settings are the values that stay fixed between runs: where the
//! sources live, where the build goes, the page title. They are layered with
//! figment: built-in defaults, then `layerpack.toml` (or the `layerpack`
//! field of `package.json`), then `LAYERPACK_`-prefixed environment
//! variables, where `__` separates nesting levels
//! (`LAYERPACK_PATHS__BUILD=out`).

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::parts::MinifyOptions;

pub const PROJECT_FILE: &str = "layerpack.toml";
pub const PACKAGE_JSON_FIELD: &str = "layerpack";
pub const ENV_PREFIX: &str = "LAYERPACK_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub paths: ProjectPaths,

    /// Title of the generated HTML entry document
    #[serde(default = "default_title")]
    pub title: String,

    /// Modules split into a separate `vendor` chunk for production builds
    #[serde(default)]
    pub vendor: Vec<String>,

    /// Public path used when building for deployment
    #[serde(default)]
    pub public_path: Option<String>,

    #[serde(default)]
    pub minify: MinifyOptions,

    /// Directory the project was loaded from; relative paths resolve here
    #[serde(skip)]
    pub root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPaths {
    #[serde(default = "default_app")]
    pub app: PathBuf,

    #[serde(default = "default_build")]
    pub build: PathBuf,

    /// Stand-alone style entry, bundled as its own `style` chunk
    #[serde(default)]
    pub style: Option<PathBuf>,

    #[serde(default)]
    pub images: Option<PathBuf>,

    #[serde(default)]
    pub fonts: Option<PathBuf>,
}

fn default_title() -> String {
    "Webpack demo".to_string()
}

fn default_app() -> PathBuf {
    PathBuf::from("app")
}

fn default_build() -> PathBuf {
    PathBuf::from("build")
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            app: default_app(),
            build: default_build(),
            style: None,
            images: None,
            fonts: None,
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            paths: ProjectPaths::default(),
            title: default_title(),
            vendor: Vec::new(),
            public_path: None,
            minify: MinifyOptions::default(),
            root: PathBuf::from("."),
        }
    }
}

impl ProjectConfig {
    /// Resolve a project-relative path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }
}

/// File-based project discovery
///
/// # Example
///
/// ```no_run
/// use layerpack_config::ProjectDiscovery;
///
/// let project = ProjectDiscovery::new(".").load().unwrap();
/// ```
pub struct ProjectDiscovery {
    root: PathBuf,
}

impl ProjectDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a project file in the root directory
    ///
    /// Searches in this order:
    /// 1. `layerpack.toml`
    /// 2. `package.json` (`layerpack` field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(PROJECT_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|v| !v.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load project settings. A missing project file is not an error; the
    /// defaults (and environment overrides) apply.
    pub fn load(&self) -> Result<ProjectConfig> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => {
                tracing::debug!(root = %self.root.display(), "no project file, using defaults");
                self.extract(self.base())
            }
        }
    }

    /// Load project settings from a specific file
    pub fn load_from(&self, path: &Path) -> Result<ProjectConfig> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        tracing::debug!(path = %path.display(), "loading project file");

        let figment = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            self.base().merge(Serialized::defaults(self.package_json_field(path)?))
        } else {
            self.base().merge(Toml::file(path))
        };

        self.extract(figment)
    }

    fn base(&self) -> Figment {
        Figment::from(Serialized::defaults(ProjectConfig::default()))
    }

    fn extract(&self, figment: Figment) -> Result<ProjectConfig> {
        let figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        let config: ProjectConfig = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "project".to_string(),
            hint: Some(e.to_string()),
        })?;
        Ok(config.with_root(&self.root))
    }

    fn package_json_field(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {e}")),
            })?;

        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(value) if !value.is_null() => Ok(value.clone()),
            _ => Err(ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("Add a 'layerpack' field to your package.json".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_project_file() {
        let dir = TempDir::new().unwrap();
        assert!(ProjectDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn find_prefers_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_FILE), "title = \"a\"\n").unwrap();
        fs::write(dir.path().join("package.json"), r#"{"layerpack": {}}"#).unwrap();

        let found = ProjectDiscovery::new(dir.path()).find().unwrap();
        assert!(found.ends_with(PROJECT_FILE));
    }

    #[test]
    fn package_json_without_field_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name": "demo"}"#).unwrap();
        assert!(ProjectDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_from_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = ProjectDiscovery::new(dir.path())
            .load_from(&dir.path().join("nope.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let project = ProjectConfig::default().with_root("/work");
        assert_eq!(project.resolve(Path::new("app")), PathBuf::from("/work/app"));
        assert_eq!(project.resolve(Path::new("/abs")), PathBuf::from("/abs"));
    }
}
