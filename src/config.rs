//! Optional YAML settings for a game session.
//!
//! Every field has a serde default, so an empty mapping yields the classic
//! rules. Sessions started without a settings file use [`GameConfig::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::zoo::START_BANK;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings file: {0}")]
    Read(#[from] std::io::Error),
    #[error("could not parse settings file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("starting bank must be at least $1, got ${0}")]
    StartingBank(f64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opening bank balance.
    #[serde(default = "default_starting_bank")]
    pub starting_bank: f64,
    /// Fixed RNG seed; absent means seed from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_starting_bank() -> f64 {
    START_BANK
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_bank: default_starting_bank(),
            seed: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load and validate settings from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: GameConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save settings to a YAML file.
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// A zoo born below one dollar would be bankrupt before its first day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_bank < 1.0 {
            return Err(ConfigError::StartingBank(self.starting_bank));
        }
        Ok(())
    }
}
