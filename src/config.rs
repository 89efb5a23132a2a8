//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the console front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Seed for starting-player and tie-break randomness.
    #[serde(default)]
    seed: Option<u64>,

    /// Name shown for the human seat.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Name shown for the computer seat.
    #[serde(default = "default_computer_name")]
    computer_name: String,
}

#[instrument]
fn default_computer_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_human_name() -> String {
    "You".to_string()
}

#[instrument]
fn default_computer_name() -> String {
    "Computer".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_computer_delay_ms(),
            seed: None,
            human_name: default_human_name(),
            computer_name: default_computer_name(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(
            delay_ms = config.computer_delay_ms,
            seed = ?config.seed,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, computer_delay_ms: Option<u64>, seed: Option<u64>) -> Self {
        if let Some(delay) = computer_delay_ms {
            self.computer_delay_ms = delay;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Pause before the computer replies.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 42\nhuman_name = \"Ada\"").unwrap();

        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(config.human_name(), "Ada");
        assert_eq!(*config.computer_delay_ms(), 500);
        assert_eq!(config.computer_name(), "Computer");
    }

    #[test]
    fn test_bad_toml_reports_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "computer_delay_ms = \"soon\"").unwrap();

        let err = PlayConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_error_records_caller_location() {
        let line = line!() + 1;
        let err = ConfigError::new("boom".to_string());
        assert_eq!(err.line, line);
        assert!(err.file.ends_with("config.rs"));
        assert_eq!(
            err.to_string(),
            format!("Config error: boom at {}:{line}", err.file)
        );
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = PlayConfig::load_or_default(path).unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = PlayConfig::default().with_overrides(Some(0), Some(7));
        assert_eq!(config.computer_delay(), Duration::ZERO);
        assert_eq!(*config.seed(), Some(7));

        let unchanged = PlayConfig::default().with_overrides(None, None);
        assert_eq!(unchanged, PlayConfig::default());
    }
}
