//! Terminal output: status messages and the composition summary.
//!
//! Everything here writes to stderr, leaving stdout to `compose --stdout`
//! and `schema`.
//!
//! # Examples
//!
//! ```no_run
//! use layerpack_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Wrote webpack.config.json");
//! ui::info("Composing build configuration");
//! ```

mod format;
mod messages;

pub use format::{format_duration, format_size, print_compose_summary, ComposeSummary};
pub use messages::{info, success};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support. Call once, early in `main`.
pub fn init_colors(no_color: bool) {
    console::set_colors_enabled_stderr(!no_color && should_use_color());
}

pub(crate) fn colors_enabled() -> bool {
    console::colors_enabled_stderr()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_no_color_flag_disables_colors() {
        init_colors(true);
        assert!(!colors_enabled());
    }

    #[test]
    #[serial]
    fn test_should_use_color_no_color_overrides_force() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_color());
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_should_use_color_force_color() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_color());
        unsafe { std::env::remove_var("FORCE_COLOR") };
    }
}
