//! Front-end configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{ConfigError, EngineConfig, Player, TurnPolicy};
use tracing::{debug, info, instrument};

/// Settings for the terminal front-end.
///
/// ```toml
/// markers = ["X", "O"]
///
/// [engine]
/// turn_policy = "strict"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct UiConfig {
    /// Marker shown for player 1 and player 2.
    #[serde(default = "default_markers")]
    markers: [String; 2],

    /// Rules engine settings.
    #[serde(default)]
    engine: EngineConfig,
}

fn default_markers() -> [String; 2] {
    ["X".to_string(), "O".to_string()]
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            markers: default_markers(),
            engine: EngineConfig::default(),
        }
    }
}

impl UiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading UI config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(markers = ?config.markers, "UI config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::new("Markers must not be blank"));
        }
        Ok(config)
    }

    /// Marker for `player`.
    pub fn marker(&self, player: Player) -> &str {
        &self.markers[player.slot()]
    }

    /// Overrides the turn policy.
    pub fn set_turn_policy(&mut self, policy: TurnPolicy) {
        self.engine = self.engine.clone().with_turn_policy(policy);
    }

    /// Overrides the markers.
    pub fn set_markers(&mut self, markers: [String; 2]) {
        self.markers = markers;
    }
}
