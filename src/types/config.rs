//! Configuration for Quartet.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::QuartetResult;

/// Main configuration for Quartet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Log scanner settings.
    #[serde(default)]
    pub logscan: LogscanConfig,

    /// Assistant bot settings.
    #[serde(default)]
    pub bot: BotConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Log scanner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogscanConfig {
    /// Recognized levels, in classification and display order.
    #[serde(default = "default_levels")]
    pub levels: Vec<String>,
}

impl Default for LogscanConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
        }
    }
}

fn default_levels() -> Vec<String> {
    crate::logscan::LOG_LEVELS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Assistant bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Minimum number of digits in a valid phone number.
    #[serde(default = "default_phone_min")]
    pub phone_min_digits: usize,

    /// Maximum number of digits in a valid phone number.
    #[serde(default = "default_phone_max")]
    pub phone_max_digits: usize,

    /// Prompt shown while waiting for a command.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            phone_min_digits: default_phone_min(),
            phone_max_digits: default_phone_max(),
            prompt: default_prompt(),
        }
    }
}

fn default_phone_min() -> usize {
    10
}

fn default_phone_max() -> usize {
    15
}

fn default_prompt() -> String {
    "Enter a command: ".to_string()
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> QuartetResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> QuartetResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            logscan: LogscanConfig::default(),
            bot: BotConfig::default(),
        }
    }

    /// Tries to load configuration from the given path or uses default.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_else(|_| Self::default_config())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
