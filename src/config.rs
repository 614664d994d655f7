use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DEMO_DURATION_MS, DEFAULT_LOG_FILE};

/// Settings of the demo presenter. The store itself has none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Directory the log file is written to
    pub log_dir: PathBuf,
    pub log_file: String,
    /// Redraw and input poll interval
    pub tick_rate_ms: u64,
    /// Duration given to toasts and notifications created from the keyboard
    pub default_duration_ms: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            log_dir: PathBuf::from("."),
            log_file: String::from(DEFAULT_LOG_FILE),
            tick_rate_ms: 100,
            default_duration_ms: DEFAULT_DEMO_DURATION_MS,
        }
    }
}

impl BoardConfig {
    /// `~/.notice-board`, or `./.notice-board` without a home directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
    }

    /// Load from the default location, falling back to defaults on any problem
    pub fn load() -> Self {
        let path = Self::config_dir().join(CONFIG_FILE_NAME);
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = BoardConfig::load_from(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "tick_rate_ms: 250\nlog_file: board.log\n").unwrap();

        let config = BoardConfig::load_from(&path).unwrap();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log_file, "board.log");
        assert_eq!(config.default_duration_ms, DEFAULT_DEMO_DURATION_MS);
        assert_eq!(config.log_dir, PathBuf::from("."));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "tick_rate_ms: [not, a, number]\n").unwrap();
        assert!(BoardConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_tick_rate_has_floor() {
        let config = BoardConfig {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
    }
}
