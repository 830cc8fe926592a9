//! Configuration loading and typed config structures for the Ant Farm simulation.
//!
//! The configuration lives in `antfarm-config.yaml`. This module defines
//! strongly-typed structs that mirror the YAML structure and a loader that
//! reads the file. Every field has a default, so a partial (or empty) file
//! is valid and a missing file means the stock simulation.

use std::path::Path;

use antfarm_agents::{SpeciesPresets, VitalsConfig};
use serde::Deserialize;

/// Environment variable that overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "ANTFARM_LOG_LEVEL";

/// Why `antfarm-config.yaml` could not be turned into a [`SimulationConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read antfarm config: {source}")]
    Io {
        /// Read failure.
        #[from]
        source: std::io::Error,
    },

    /// The text is not a valid farm configuration.
    #[error("invalid antfarm config: {source}")]
    Yaml {
        /// Deserializer failure, with line and column when known.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Farm-wide settings (room capacity, step model).
    #[serde(default)]
    pub farm: FarmConfig,

    /// Health adjustments for resting and waking.
    #[serde(default)]
    pub vitals: VitalsConfig,

    /// Species stat presets used by the ant factory.
    #[serde(default)]
    pub presets: SpeciesPresets,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Console front-end settings.
    #[serde(default)]
    pub cli: CliConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `ANTFARM_LOG_LEVEL` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml reads an empty document as unit, not as an empty map.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.logging.apply_env_overrides();
        Ok(config)
    }
}

/// Farm-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FarmConfig {
    /// Resting capacity given to every room created by `spawn_colony`.
    #[serde(default = "default_room_capacity")]
    pub room_capacity: usize,

    /// Run the agent-level step (wake / count active tick) at the start of
    /// every room pass. Off by default: the room pass alone is the step.
    #[serde(default)]
    pub agent_step: bool,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            room_capacity: default_room_capacity(),
            agent_step: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Override the log level from [`LOG_LEVEL_ENV`] when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(LOG_LEVEL_ENV) {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Console front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Print per-ant activity lines while ticking.
    #[serde(default = "default_true")]
    pub echo_activity: bool,

    /// Print the welcome banner and the `> ` prompt.
    #[serde(default = "default_true")]
    pub show_banner: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            echo_activity: true,
            show_banner: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_room_capacity() -> usize {
    10
}

fn default_log_level() -> String {
    "warn".to_owned()
}

const fn default_true() -> bool {
    true
}
