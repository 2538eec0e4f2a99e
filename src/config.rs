//! App Configuration
//!
//! The screen configuration is embedded at build time from `config/app.json`.

use todo_core::config::{ConfigError, TodoConfig};

const APP_CONFIG: &str = include_str!("../config/app.json");

pub fn load() -> Result<TodoConfig, ConfigError> {
    TodoConfig::from_json(APP_CONFIG)
}
