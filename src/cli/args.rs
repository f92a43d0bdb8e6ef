//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigSortOrder};
use crate::consts::DEFAULT_INTERVAL_SECS;
use crate::core::{FormatOptions, FormatStyle};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum StyleArg {
    /// Smart unit selection (default)
    #[default]
    Automatic,
    /// Always show days
    Days,
    /// Collapse days into total hours
    Hours,
    /// No separators between unit groups
    Compact,
}

impl StyleArg {
    pub(crate) fn to_style(self) -> FormatStyle {
        match self {
            StyleArg::Automatic => FormatStyle::Automatic,
            StyleArg::Days => FormatStyle::AlwaysShowDays,
            StyleArg::Hours => FormatStyle::AlwaysShowHours,
            StyleArg::Compact => FormatStyle::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum SortOrder {
    /// Oldest first (default)
    #[default]
    Asc,
    /// Newest first
    Desc,
}

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

#[derive(Parser)]
#[command(name = "uptrack")]
#[command(about = "System uptime tracker with session history and milestones", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Uptime display style
    #[arg(long, global = true, value_enum)]
    pub(crate) style: Option<StyleArg>,

    /// Tick interval in seconds (floor 0.5)
    #[arg(short, long, global = true, value_name = "SECS")]
    pub(crate) interval: Option<f64>,

    /// Include seconds in the display
    #[arg(long, global = true)]
    pub(crate) seconds: bool,

    /// Hide the minutes group
    #[arg(long, global = true)]
    pub(crate) no_minutes: bool,

    /// Hide the up-arrow (↑) indicator
    #[arg(long, global = true)]
    pub(crate) no_arrow: bool,

    /// Disable milestone notifications
    #[arg(long, global = true)]
    pub(crate) no_milestones: bool,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Sort order for history listings
    #[arg(long, global = true, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (show skipped ticks)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Timezone for date display (e.g., "Asia/Shanghai", "UTC", "local")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.style.is_none() {
            self.style = config.style.map(|s| match s.to_style() {
                FormatStyle::Automatic => StyleArg::Automatic,
                FormatStyle::AlwaysShowDays => StyleArg::Days,
                FormatStyle::AlwaysShowHours => StyleArg::Hours,
                FormatStyle::Compact => StyleArg::Compact,
            });
        }
        if self.interval.is_none() {
            self.interval = config.interval;
        }

        // For boolean flags, config only applies if CLI is false (default)
        if !self.seconds && config.show_seconds {
            self.seconds = true;
        }
        if !self.no_minutes && !config.show_minutes {
            self.no_minutes = true;
        }
        if !self.no_arrow && !config.show_arrow {
            self.no_arrow = true;
        }
        if !self.no_milestones && !config.milestones {
            self.no_milestones = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(order) = config.order
            && matches!(self.order, SortOrder::Asc)
            && matches!(order, ConfigSortOrder::Desc)
        {
            self.order = SortOrder::Desc;
        }

        if let Some(color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            match color {
                ConfigColorMode::Always => self.color = ColorMode::Always,
                ConfigColorMode::Never => self.color = ColorMode::Never,
                ConfigColorMode::Auto => {}
            }
        }

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

    pub(crate) fn style(&self) -> FormatStyle {
        self.style.unwrap_or_default().to_style()
    }

    pub(crate) fn interval_secs(&self) -> f64 {
        self.interval.unwrap_or(DEFAULT_INTERVAL_SECS)
    }

    pub(crate) fn milestones_enabled(&self) -> bool {
        !self.no_milestones
    }

    /// Display options for the given surface. The arrow only appears on the
    /// compact (menubar-style) line.
    pub(crate) fn format_options(&self, compact_display: bool) -> FormatOptions {
        FormatOptions {
            include_seconds: self.seconds,
            include_minutes: !self.no_minutes,
            compact_display,
            force_spaces: true,
            arrow: compact_display && !self.no_arrow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("parse test args")
    }

    #[test]
    fn defaults_without_config() {
        let cli = parse(&["uptrack"]);
        assert_eq!(cli.style(), FormatStyle::Automatic);
        assert_eq!(cli.interval_secs(), 1.0);
        assert!(cli.milestones_enabled());
        let opts = cli.format_options(false);
        assert!(!opts.include_seconds);
        assert!(opts.include_minutes);
    }

    #[test]
    fn config_fills_unset_values() {
        let cli = parse(&["uptrack"]);
        let config: crate::config::Config = toml::from_str(
            r#"
            interval = 3.0
            style = "hours"
            show_minutes = false
            milestones = false
            order = "desc"
            "#,
        )
        .unwrap();
        let cli = cli.with_config(&config);
        assert_eq!(cli.style(), FormatStyle::AlwaysShowHours);
        assert_eq!(cli.interval_secs(), 3.0);
        assert!(cli.no_minutes);
        assert!(!cli.milestones_enabled());
        assert!(matches!(cli.order, SortOrder::Desc));
    }

    #[test]
    fn cli_args_win_over_config() {
        let cli = parse(&["uptrack", "--style", "compact", "--interval", "5"]);
        let config: crate::config::Config = toml::from_str(
            r#"
            interval = 3.0
            style = "hours"
            "#,
        )
        .unwrap();
        let cli = cli.with_config(&config);
        assert_eq!(cli.style(), FormatStyle::Compact);
        assert_eq!(cli.interval_secs(), 5.0);
    }

    #[test]
    fn arrow_only_on_compact_surface() {
        let cli = parse(&["uptrack"]);
        assert!(cli.format_options(true).arrow);
        assert!(!cli.format_options(false).arrow);

        let cli = parse(&["uptrack", "--no-arrow"]);
        assert!(!cli.format_options(true).arrow);
    }
}
