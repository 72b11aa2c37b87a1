//! Logging infrastructure for the Layerpack CLI.
//!
//! Structured logging on the `tracing` ecosystem. Library code in
//! `layerpack_config` emits events; this module decides which of them reach
//! stderr.
//!
//! # Example
//!
//! ```rust,no_run
//! use layerpack_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("composing build configuration");
//! debug!(count = 4, "produced fragments");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "layerpack=debug,layerpack_config=debug,layerpack_cli=debug";
const QUIET_FILTER: &str = "layerpack=error,layerpack_config=error,layerpack_cli=error";
const DEFAULT_FILTER: &str = "layerpack=info,layerpack_config=info,layerpack_cli=info";

/// Pick the filter for the given flags.
///
/// The level is determined in this order:
/// 1. `--verbose`: DEBUG for layerpack crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. INFO for layerpack crates
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs. Logs go
/// to stderr so `compose --stdout` output stays clean.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
///
/// # Example
///
/// ```rust,no_run
/// use layerpack_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("layerpack_config=trace"), false);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // tracing is global and can only be initialized once per process, so
    // these tests cover filter selection rather than output.

    #[test]
    fn test_verbose_filter_enables_debug() {
        let filter = filter_for(true, false);
        assert!(filter.to_string().contains("layerpack_config=debug"));
    }

    #[test]
    fn test_quiet_filter_is_errors_only() {
        let filter = filter_for(false, true);
        assert!(filter.to_string().contains("layerpack_cli=error"));
        assert!(!filter.to_string().contains("info"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(false, true, true);
        init_logger(true, false, true);
    }
}
