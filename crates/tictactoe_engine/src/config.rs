//! Engine configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the engine treats the player named in a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TurnPolicy {
    /// Reject moves for the player not on turn with `OutOfTurn`.
    #[default]
    Strict,
    /// Accept whichever player the caller names.
    Trusting,
}

/// Configuration for a [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Turn enforcement policy.
    #[serde(default)]
    turn_policy: TurnPolicy,
}

impl EngineConfig {
    /// Creates a configuration with the given turn policy.
    pub fn new(turn_policy: TurnPolicy) -> Self {
        Self { turn_policy }
    }

    /// Returns a copy with the turn policy replaced.
    pub fn with_turn_policy(mut self, turn_policy: TurnPolicy) -> Self {
        self.turn_policy = turn_policy;
        self
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading engine config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(turn_policy = %config.turn_policy, "Engine config loaded");
        Ok(config)
    }
}

/// Configuration error with location tracking.
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
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(*EngineConfig::default().turn_policy(), TurnPolicy::Strict);
    }

    #[test]
    fn test_parse_trusting() {
        let config = EngineConfig::from_toml("turn_policy = \"trusting\"").unwrap();
        assert_eq!(*config.turn_policy(), TurnPolicy::Trusting);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let err = EngineConfig::from_toml("turn_policy = \"lenient\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = EngineConfig::from_file("/nonexistent/tictactoe.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
