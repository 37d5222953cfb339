//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "versecast")]
#[command(about = "Post a daily verse or prayer image to a Facebook page", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Config file (default: ./versecast.toml, then ~/.config/versecast/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Use this date instead of today (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) date: Option<String>,

    /// Timezone deciding today's date and the time of day (e.g., "Asia/Manila", "UTC")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Render the image but do not publish or write history
    #[arg(short = 'n', long, global = true)]
    pub(crate) dry_run: bool,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TimeOfDay;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "versecast",
            "prayer",
            "--slot",
            "evening",
            "--dry-run",
            "--date",
            "2026-10-18",
            "-j",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert!(cli.json);
        assert_eq!(cli.date.as_deref(), Some("2026-10-18"));
        assert!(matches!(
            cli.command,
            Commands::Prayer {
                slot: Some(TimeOfDay::Evening)
            }
        ));
    }

    #[test]
    fn no_color_overrides_always() {
        let cli = Cli::try_parse_from(["versecast", "preview", "--color", "always", "--no-color"])
            .unwrap();
        assert!(!cli.use_color());

        let cli = Cli::try_parse_from(["versecast", "preview", "--color", "always"]).unwrap();
        assert!(cli.use_color());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["versecast"]).is_err());
    }

    #[test]
    fn cli_timezone_wins_over_config() {
        let config = Config {
            timezone: Some("Asia/Manila".to_string()),
            ..Config::default()
        };

        let cli = Cli::try_parse_from(["versecast", "verse", "--timezone", "UTC"])
            .unwrap()
            .with_config(&config);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));

        let cli = Cli::try_parse_from(["versecast", "verse"])
            .unwrap()
            .with_config(&config);
        assert_eq!(cli.timezone.as_deref(), Some("Asia/Manila"));
    }
}
