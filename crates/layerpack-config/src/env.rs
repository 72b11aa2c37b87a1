//! Environment signals consumed by the composer.
//!
//! The process environment is read exactly once, by [`ComposeEnv::from_process`]
//! at the entry point. Everything below the entry point receives the resulting
//! immutable [`ComposeEnv`]; producers never look at the environment.

use figment::providers::Env;

use crate::error::{ConfigError, Result};
use crate::mode::Mode;

pub const LIFECYCLE_VAR: &str = "npm_lifecycle_event";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const DEPLOY_VAR: &str = "DEPLOY";
pub const PUBLIC_PATH_VAR: &str = "PUBLIC_PATH";

const VARS: [&str; 5] = [LIFECYCLE_VAR, HOST_VAR, PORT_VAR, DEPLOY_VAR, PUBLIC_PATH_VAR];

/// Values taken from the environment for one composition run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeEnv {
    pub mode: Mode,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Building for deployment under a public path
    pub deploy: bool,
    pub public_path: Option<String>,
}

fn text(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_port(raw: Option<String>) -> Result<Option<u16>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidEnv {
            var: PORT_VAR,
            value: raw,
            hint: "expected a port number between 1 and 65535".to_string(),
        }),
        Ok(port) => Ok(Some(port)),
    }
}

fn parse_flag(raw: Option<String>) -> Result<bool> {
    let Some(raw) = raw else {
        return Ok(false);
    };
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var: DEPLOY_VAR,
            value: raw,
            hint: "expected true/false, yes/no, on/off or 1/0".to_string(),
        }),
    }
}

impl ComposeEnv {
    /// Read the signals from the process environment.
    ///
    /// Values are taken verbatim as strings; only `PORT` and `DEPLOY` are
    /// parsed further.
    pub fn from_process() -> Result<Self> {
        Self::from_vars(
            Env::raw()
                .only(&VARS)
                .iter()
                .map(|(key, value)| (key.as_str().to_string(), value)),
        )
    }

    /// Read the signals from `(name, value)` pairs. Names match
    /// case-insensitively and unrelated names are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values: [Option<String>; 5] = Default::default();
        for (key, value) in vars {
            if let Some(slot) = VARS
                .iter()
                .position(|var| var.eq_ignore_ascii_case(key.as_ref()))
            {
                values[slot] = text(value.into());
            }
        }
        let [lifecycle, host, port, deploy, public_path] = values;

        let env = ComposeEnv {
            mode: Mode::from_lifecycle(lifecycle.as_deref()),
            host,
            port: parse_port(port)?,
            deploy: parse_flag(deploy)?,
            public_path,
        };

        tracing::debug!(
            mode = %env.mode,
            host = ?env.host,
            port = ?env.port,
            deploy = env.deploy,
            "read composition environment"
        );
        Ok(env)
    }

    /// Replace the lifecycle-derived mode, e.g. from a `--mode` flag.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn empty_environment_uses_defaults() {
        let env = ComposeEnv::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(env, ComposeEnv::default());
    }

    #[test]
    fn host_is_taken_verbatim() {
        Jail::expect_with(|jail| {
            jail.set_env("HOST", "[::1]");
            jail.set_env("PUBLIC_PATH", "true");

            let env = ComposeEnv::from_process().unwrap();
            assert_eq!(env.host.as_deref(), Some("[::1]"));
            assert_eq!(env.public_path.as_deref(), Some("true"));
            Ok(())
        });
    }

    #[test]
    fn unrelated_vars_are_ignored() {
        let env = ComposeEnv::from_vars([("PATH", "/usr/bin"), ("port", "4000")]).unwrap();
        assert_eq!(env.port, Some(4000));
        assert_eq!(env.mode, Mode::Default);
    }

    #[test]
    fn reads_signals_from_process() {
        Jail::expect_with(|jail| {
            jail.set_env("npm_lifecycle_event", "buildProd");
            jail.set_env("HOST", "0.0.0.0");
            jail.set_env("PORT", "3000");
            jail.set_env("DEPLOY", "1");
            jail.set_env("PUBLIC_PATH", "/demo/");

            let env = ComposeEnv::from_process().unwrap();
            assert_eq!(env.mode, Mode::BuildProd);
            assert_eq!(env.host.as_deref(), Some("0.0.0.0"));
            assert_eq!(env.port, Some(3000));
            assert!(env.deploy);
            assert_eq!(env.public_path.as_deref(), Some("/demo/"));
            Ok(())
        });
    }

    #[test]
    fn empty_values_count_as_unset() {
        Jail::expect_with(|jail| {
            jail.set_env("HOST", "");
            jail.set_env("PORT", "");

            let env = ComposeEnv::from_process().unwrap();
            assert!(env.host.is_none());
            assert!(env.port.is_none());
            Ok(())
        });
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", "http");

            let err = ComposeEnv::from_process().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidEnv { var: "PORT", .. }));
            Ok(())
        });
    }

    #[test]
    fn port_out_of_range_is_rejected() {
        assert!(parse_port(Some("70000".into())).is_err());
        assert!(parse_port(Some("0".into())).is_err());
        assert_eq!(parse_port(Some("8080".into())).unwrap(), Some(8080));
    }
}
