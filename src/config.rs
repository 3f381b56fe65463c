//! Ambient settings: theme and logging.
//!
//! Settings are layered, lowest priority first: built-in defaults, an
//! optional TOML file, then `NETWATCH_*` environment variables. Command-line
//! flags are applied on top by the binary.
//!
//! ```toml
//! theme = "dark"
//! log_file = "netwatch.log"
//! log_level = "netwatch=debug"
//! ```
//!
//! The traffic model itself (ranges, sampling period, buffer sizes) is fixed
//! and deliberately not configurable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::ui::Theme;

/// Prefix for environment overrides (e.g. `NETWATCH_THEME=light`).
pub const ENV_PREFIX: &str = "NETWATCH";

/// Which colour theme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Pick based on the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeChoice {
    /// Build the concrete theme.
    pub fn resolve(self) -> Theme {
        match self {
            ThemeChoice::Auto => Theme::auto_detect(),
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
        }
    }
}

/// Ambient settings for a run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Colour theme.
    pub theme: ThemeChoice,
    /// Where to write logs. No logs are written when unset, since the
    /// terminal belongs to the TUI.
    pub log_file: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `info` or `netwatch=debug`.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Auto,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from an optional file plus `NETWATCH_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Load settings, reading environment overrides under `prefix`.
    pub fn load_with_prefix(path: Option<&Path>, prefix: &str) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(Environment::with_prefix(prefix))
            .build()
            .context("failed to read settings")?;

        config.try_deserialize().context("invalid settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_sources() {
        let settings = Settings::load_with_prefix(None, "NETWATCH_TEST_NONE").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netwatch.toml");
        fs::write(
            &path,
            "theme = \"light\"\nlog_file = \"/tmp/netwatch.log\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let settings = Settings::load_with_prefix(Some(&path), "NETWATCH_TEST_FILE").unwrap();
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/netwatch.log")));
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netwatch.toml");
        fs::write(&path, "theme = \"dark\"\n").unwrap();

        let settings = Settings::load_with_prefix(Some(&path), "NETWATCH_TEST_PARTIAL").unwrap();
        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert_eq!(settings.log_file, None);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netwatch.toml");
        fs::write(&path, "theme = \"dark\"\nlog_level = \"warn\"\n").unwrap();

        std::env::set_var("NETWATCH_TEST_ENV_LOG_LEVEL", "trace");
        let settings = Settings::load_with_prefix(Some(&path), "NETWATCH_TEST_ENV").unwrap();
        std::env::remove_var("NETWATCH_TEST_ENV_LOG_LEVEL");

        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert_eq!(settings.log_level, "trace");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(Settings::load_with_prefix(Some(&path), "NETWATCH_TEST_MISSING").is_err());
    }

    #[test]
    fn test_invalid_theme_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netwatch.toml");
        fs::write(&path, "theme = \"purple\"\n").unwrap();
        assert!(Settings::load_with_prefix(Some(&path), "NETWATCH_TEST_BAD").is_err());
    }
}
