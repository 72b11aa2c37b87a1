use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::ModeArg;

/// Default file the composed configuration is written to
pub const DEFAULT_OUT: &str = "webpack.config.json";

/// Available Layerpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the configuration for a build mode
    ///
    /// Loads the project settings, reads the environment, merges the
    /// fragments the mode selects and writes the validated result.
    Compose(ComposeArgs),

    /// Validate an existing configuration file
    ///
    /// Runs the same checks a freshly composed configuration passes.
    Check(CheckArgs),

    /// Print the JSON schema of a composed configuration
    Schema(SchemaArgs),
}

/// Arguments for the compose command
#[derive(Args, Debug, Clone)]
pub struct ComposeArgs {
    /// Build mode
    ///
    /// Overrides the mode derived from `npm_lifecycle_event`. Without either,
    /// the dev-server configuration is composed.
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Project directory or project file
    ///
    /// A directory is searched for layerpack.toml, then for a `layerpack`
    /// field in package.json. Defaults to the current directory.
    #[arg(short, long, value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// File the configuration is written to
    ///
    /// Relative paths resolve against the project directory.
    #[arg(short, long, default_value = DEFAULT_OUT, value_name = "FILE")]
    pub out: PathBuf,

    /// Print the configuration to stdout instead of writing a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Configuration file to validate
    #[arg(default_value = DEFAULT_OUT, value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the schema command
#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    /// Write the schema to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}
