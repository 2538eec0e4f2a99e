//! Screen Configuration
//!
//! Display options for the to-do screen, read from a JSON document.
//! Missing fields take their defaults.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Configuration parsing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    InvalidLogLevel(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Invalid config: {}", msg),
            ConfigError::InvalidLogLevel(level) => write!(f, "Invalid log level: {}", level),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Heading shown above the input
    pub title: String,
    /// Placeholder of the new-item input
    pub placeholder: String,
    /// Ask before deleting a row
    pub confirm_delete: bool,
    /// Show the "N items, M completed" footer
    pub show_summary: bool,
    /// One of off/error/warn/info/debug/trace
    pub log_level: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            title: "My Todos".to_string(),
            placeholder: "Add a new todo...".to_string(),
            confirm_delete: false,
            show_summary: true,
            log_level: "info".to_string(),
        }
    }
}

impl TodoConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TodoConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
