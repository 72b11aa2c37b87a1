//! Layerpack CLI - composes a bundler configuration from layered fragments.
//!
//! This is the main entry point. It parses arguments, initializes logging and
//! reads the environment once before dispatching to a command.

use clap::Parser;
use layerpack_cli::{cli, commands, error, logger, ui};
use layerpack_config::ComposeEnv;
use miette::Result;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Compose(compose_args) => ComposeEnv::from_process()
            .map_err(Into::into)
            .and_then(|env| commands::compose_execute(compose_args, env)),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Schema(schema_args) => commands::schema_execute(schema_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
