use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Which build a run is for, selected by the package-manager lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Development server with inline styles and source maps
    #[default]
    Default,
    /// Development build written to `<build>/dev`
    Build,
    /// Minified production build written to `<build>/prod`
    BuildProd,
}

impl Mode {
    /// Map a lifecycle event name to a mode.
    ///
    /// Unknown or missing events fall back to [`Mode::Default`], the same way
    /// `npm start` and other scripts all run the dev server.
    pub fn from_lifecycle(event: Option<&str>) -> Self {
        match event.map(str::trim) {
            Some("build") => Mode::Build,
            Some("buildProd") | Some("build:prod") => Mode::BuildProd,
            _ => Mode::Default,
        }
    }

    pub fn is_build(self) -> bool {
        !matches!(self, Mode::Default)
    }

    /// Directory appended to the configured build path.
    pub fn output_suffix(self) -> Option<&'static str> {
        match self {
            Mode::Default => None,
            Mode::Build => Some("dev"),
            Mode::BuildProd => Some("prod"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::Build => "build",
            Mode::BuildProd => "buildProd",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing for explicit `--mode` values.
impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" | "dev" => Ok(Mode::Default),
            "build" => Ok(Mode::Build),
            "buildProd" | "build:prod" | "prod" => Ok(Mode::BuildProd),
            other => Err(ConfigError::InvalidValue {
                field: "mode".to_string(),
                hint: Some(format!(
                    "unknown mode '{other}', expected one of: default, build, buildProd"
                )),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_events_map_to_modes() {
        assert_eq!(Mode::from_lifecycle(Some("build")), Mode::Build);
        assert_eq!(Mode::from_lifecycle(Some("buildProd")), Mode::BuildProd);
        assert_eq!(Mode::from_lifecycle(Some("start")), Mode::Default);
        assert_eq!(Mode::from_lifecycle(None), Mode::Default);
    }

    #[test]
    fn explicit_mode_parsing_is_strict() {
        assert_eq!("build".parse::<Mode>().unwrap(), Mode::Build);
        assert!("release".parse::<Mode>().is_err());
    }

    #[test]
    fn suffixes() {
        assert_eq!(Mode::Default.output_suffix(), None);
        assert_eq!(Mode::Build.output_suffix(), Some("dev"));
        assert_eq!(Mode::BuildProd.output_suffix(), Some("prod"));
    }
}
