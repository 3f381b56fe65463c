//! Log subscriber setup.
//!
//! The TUI owns stdout, so logs only ever go to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Build a filter from a directive string, falling back to `info`.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber if a log file is configured.
///
/// Returns the log file path when logging was enabled.
pub fn init(settings: &Settings) -> Result<Option<&Path>> {
    let Some(path) = settings.log_file.as_deref() else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&settings.log_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_file_is_a_noop() {
        let settings = Settings::default();
        assert!(init(&settings).unwrap().is_none());
    }

    #[test]
    fn test_bad_directive_falls_back() {
        let filter = build_filter("not a [valid filter");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_unwritable_log_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            log_file: Some(dir.path().join("missing").join("netwatch.log")),
            ..Settings::default()
        };
        assert!(init(&settings).is_err());
    }
}
