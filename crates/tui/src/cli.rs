//! Command-line argument parsing for logview-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `logview_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.

use clap::Parser;
use logview_config::ColorTheme;
use logview_config::constants::DEFAULT_LOG_DIR;
use std::path::PathBuf;

/// Command-line arguments for logview-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --base-url)
/// 2. Environment variables (e.g., LOGVIEW_BASE_URL)
/// 3. `.env` file
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "logview-tui",
    about = "Terminal viewer for stored logs with on-demand AI analysis",
    version,
    after_help = "Examples:\n  logview-tui\n  logview-tui --base-url http://logs.internal:5000\n  logview-tui --timeout 30 --theme high_contrast\n  logview-tui --log-dir /var/log/logview\n"
)]
pub struct Cli {
    /// Backend base URL (overrides LOGVIEW_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds; 0 disables the timeout (overrides LOGVIEW_TIMEOUT)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Color theme: default, light, high_contrast, monochrome (overrides LOGVIEW_THEME)
    #[arg(long)]
    pub theme: Option<ColorTheme>,

    /// Directory for log files
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["logview-tui"]);
        assert!(cli.base_url.is_none());
        assert!(cli.timeout.is_none());
        assert!(cli.theme.is_none());
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_invalid_theme_is_rejected() {
        let result = Cli::try_parse_from(["logview-tui", "--theme", "neon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
