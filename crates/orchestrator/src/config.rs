//! Relay configuration.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default deadline for a detection service call.
const DEFAULT_PREDICT_TIMEOUT: Duration = Duration::from_secs(60);

/// Which processing strategy this deployment runs for photo messages.
///
/// Modes are mutually exclusive per bot instance, chosen by the deployer,
/// never by message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingMode {
    /// Captioned photos select a named filter; unknown captions are rejected.
    Filter,
    /// Photos run object detection; non-filter captions are ignored.
    Detection,
}

impl ProcessingMode {
    /// Parse a mode name ("filter" or "detection").
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "filter" => Some(Self::Filter),
            "detection" => Some(Self::Detection),
            _ => None,
        }
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held an unusable value.
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Configuration for the orchestration core.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Processing strategy for photo messages.
    pub mode: ProcessingMode,
    /// Deadline for one detection service call.
    pub predict_deadline: Duration,
    /// Scratch directory for downloaded and derived images.
    pub work_dir: PathBuf,
}

impl RelayConfig {
    /// Create a configuration with defaults for everything but the mode.
    pub fn new(mode: ProcessingMode) -> Self {
        Self {
            mode,
            predict_deadline: DEFAULT_PREDICT_TIMEOUT,
            work_dir: std::env::temp_dir().join("argus"),
        }
    }

    /// Set the detection call deadline.
    pub fn with_predict_deadline(mut self, deadline: Duration) -> Self {
        self.predict_deadline = deadline;
        self
    }

    /// Set the scratch directory.
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    /// Read configuration from environment variables.
    ///
    /// - `ARGUS_MODE` — "filter" (default) or "detection"
    /// - `ARGUS_PREDICT_TIMEOUT_SECS` — detection deadline, default 60
    /// - `ARGUS_WORK_DIR` — scratch directory, default `$TMPDIR/argus`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = match std::env::var("ARGUS_MODE") {
            Ok(value) => ProcessingMode::parse(&value).ok_or(ConfigError::Invalid {
                var: "ARGUS_MODE",
                value,
            })?,
            Err(_) => ProcessingMode::Filter,
        };

        let mut config = Self::new(mode);

        if let Ok(value) = std::env::var("ARGUS_PREDICT_TIMEOUT_SECS") {
            let secs: u64 = value.parse().map_err(|_| ConfigError::Invalid {
                var: "ARGUS_PREDICT_TIMEOUT_SECS",
                value,
            })?;
            config.predict_deadline = Duration::from_secs(secs);
        }

        if let Ok(value) = std::env::var("ARGUS_WORK_DIR") {
            config.work_dir = PathBuf::from(value);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(ProcessingMode::parse("filter"), Some(ProcessingMode::Filter));
        assert_eq!(
            ProcessingMode::parse(" Detection "),
            Some(ProcessingMode::Detection)
        );
        assert_eq!(ProcessingMode::parse("both"), None);
    }

    #[test]
    fn test_builder_defaults() {
        let config = RelayConfig::new(ProcessingMode::Detection);
        assert_eq!(config.mode, ProcessingMode::Detection);
        assert_eq!(config.predict_deadline, Duration::from_secs(60));
        assert!(config.work_dir.ends_with("argus"));
    }
}
