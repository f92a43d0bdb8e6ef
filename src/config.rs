use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::core::FormatStyle;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigStyle {
    Automatic,
    Days,
    Hours,
    Compact,
}

impl ConfigStyle {
    pub(crate) fn to_style(self) -> FormatStyle {
        match self {
            ConfigStyle::Automatic => FormatStyle::Automatic,
            ConfigStyle::Days => FormatStyle::AlwaysShowDays,
            ConfigStyle::Hours => FormatStyle::AlwaysShowHours,
            ConfigStyle::Compact => FormatStyle::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub(crate) struct Config {
    /// Tick interval in seconds; clamped to the 0.5s floor at use.
    #[serde(default)]
    pub(crate) interval: Option<f64>,
    #[serde(default)]
    pub(crate) style: Option<ConfigStyle>,
    #[serde(default)]
    pub(crate) show_seconds: bool,
    #[serde(default = "default_true")]
    pub(crate) show_minutes: bool,
    #[serde(default = "default_true")]
    pub(crate) show_arrow: bool,
    #[serde(default = "default_true")]
    pub(crate) milestones: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            interval: None,
            style: None,
            show_seconds: false,
            show_minutes: true,
            show_arrow: true,
            milestones: true,
            debug: false,
            order: None,
            color: None,
            timezone: None,
        }
    }
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        // Try config locations in order of priority
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/uptrack/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("uptrack").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/uptrack/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("uptrack").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.uptrack.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".uptrack.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_not_empty() {
        assert!(!Config::get_config_paths().is_empty());
    }

    #[test]
    fn defaults_match_documented_fallbacks() {
        let config = Config::default();
        assert!(config.interval.is_none());
        assert!(config.style.is_none());
        assert!(!config.show_seconds);
        assert!(config.show_minutes);
        assert!(config.show_arrow);
        assert!(config.milestones);
    }

    #[test]
    fn parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            interval = 2.5
            style = "compact"
            show_seconds = true
            show_minutes = false
            milestones = false
            order = "desc"
            color = "never"
            timezone = "UTC"
            "#,
        )
        .unwrap();
        assert_eq!(config.interval, Some(2.5));
        assert!(matches!(config.style, Some(ConfigStyle::Compact)));
        assert!(config.show_seconds);
        assert!(!config.show_minutes);
        assert!(config.show_arrow, "unset key keeps default");
        assert!(!config.milestones);
        assert!(matches!(config.order, Some(ConfigSortOrder::Desc)));
        assert!(matches!(config.color, Some(ConfigColorMode::Never)));
        assert_eq!(config.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    fn empty_config_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.show_minutes);
        assert!(config.milestones);
    }

    #[test]
    fn style_values_map_to_format_styles() {
        assert_eq!(ConfigStyle::Automatic.to_style(), FormatStyle::Automatic);
        assert_eq!(ConfigStyle::Days.to_style(), FormatStyle::AlwaysShowDays);
        assert_eq!(ConfigStyle::Hours.to_style(), FormatStyle::AlwaysShowHours);
        assert_eq!(ConfigStyle::Compact.to_style(), FormatStyle::Compact);
    }
}
