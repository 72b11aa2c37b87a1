//! Formatting utilities for sizes, durations and the composition summary.

use console::Term;
use owo_colors::OwoColorize;
use std::time::Duration;

use super::colors_enabled;

/// Format file size in human-readable format.
///
/// # Examples
///
/// ```
/// use layerpack_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use layerpack_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    // composition is usually well under a millisecond
    if duration < Duration::from_millis(1) {
        format!("{}µs", duration.as_micros())
    } else if duration < Duration::from_secs(1) {
        format!("{}ms", duration.as_millis())
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// What one `compose` run produced.
#[derive(Debug, Clone)]
pub struct ComposeSummary {
    pub mode: String,
    /// Where the configuration went: a file path or `stdout`
    pub destination: String,
    pub entries: Vec<String>,
    pub plugins: Vec<String>,
    pub loaders: usize,
    pub bytes: u64,
    pub elapsed: Duration,
}

/// Print the composition summary to stderr.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use layerpack_cli::ui::{print_compose_summary, ComposeSummary};
///
/// print_compose_summary(&ComposeSummary {
///     mode: "build".into(),
///     destination: "webpack.config.json".into(),
///     entries: vec!["app".into()],
///     plugins: vec!["html-webpack-plugin".into()],
///     loaders: 1,
///     bytes: 812,
///     elapsed: Duration::from_micros(420),
/// });
/// ```
pub fn print_compose_summary(summary: &ComposeSummary) {
    let width = (Term::stderr().size().1 as usize).min(60);
    let rule = "─".repeat(width);

    let rows = [
        ("mode", summary.mode.clone()),
        ("entries", summary.entries.join(", ")),
        ("loaders", summary.loaders.to_string()),
        ("plugins", summary.plugins.join(", ")),
    ];

    if colors_enabled() {
        eprintln!("\n{}", "Composed configuration".bold().underline());
        eprintln!("{rule}");
        for (label, value) in rows {
            eprintln!("  {} {:<8} {}", "▸".blue(), label.dimmed(), value.bright_white());
        }
        eprintln!("{rule}");
        eprintln!(
            "  {} {} ({}) in {}",
            "Wrote:".bold(),
            summary.destination,
            format_size(summary.bytes).green(),
            format_duration(summary.elapsed).green()
        );
    } else {
        eprintln!("\nComposed configuration");
        eprintln!("{rule}");
        for (label, value) in rows {
            eprintln!("  ▸ {label:<8} {value}");
        }
        eprintln!("{rule}");
        eprintln!(
            "  Wrote: {} ({}) in {}",
            summary.destination,
            format_size(summary.bytes),
            format_duration(summary.elapsed)
        );
    }
}
