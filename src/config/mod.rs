//! Configuration management module
//!
//! Handles loading, saving, and validation of user preferences.

use crate::{MenuBoardError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MIN_TICK_RATE_MS: u64 = 16;
const MAX_TICK_RATE_MS: u64 = 5000;
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// User preferences for the menu board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Header shown on the home screen
    pub restaurant_name: String,
    /// Prefix for every displayed price
    pub currency_symbol: String,
    /// Start with the house menu instead of an empty one
    pub seed_menu: bool,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Default log filter when MENUBOARD_LOG is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            restaurant_name: "Christoteffel Restaurant".to_string(),
            currency_symbol: "R".to_string(),
            seed_menu: true,
            tick_rate_ms: 250,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.restaurant_name.trim().is_empty() {
            return Err(MenuBoardError::Config(
                "Restaurant name must not be empty".to_string(),
            ));
        }

        if self.tick_rate_ms < MIN_TICK_RATE_MS || self.tick_rate_ms > MAX_TICK_RATE_MS {
            return Err(MenuBoardError::Config(format!(
                "Tick rate must be between {} and {} ms",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(MenuBoardError::Config(format!(
                "Unknown log level: {} (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Poll interval for the event loop
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Set the restaurant name
    pub fn with_restaurant_name(mut self, name: impl Into<String>) -> Self {
        self.restaurant_name = name.into();
        self
    }

    /// Set the currency symbol
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Set whether to start with the house menu
    pub fn with_seed_menu(mut self, seed: bool) -> Self {
        self.seed_menu = seed;
        self
    }

    /// Set the event poll interval
    pub fn with_tick_rate_ms(mut self, millis: u64) -> Self {
        self.tick_rate_ms = millis;
        self
    }

    /// Set the default log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            MenuBoardError::Config(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            MenuBoardError::Config(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MenuBoardError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            MenuBoardError::Config(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/menuboard/menuboard.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            MenuBoardError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency_symbol, "R");
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_validation_failures() {
        assert!(AppConfig::new().with_restaurant_name("  ").validate().is_err());
        assert!(AppConfig::new().with_tick_rate_ms(0).validate().is_err());
        assert!(AppConfig::new().with_tick_rate_ms(10_000).validate().is_err());
        assert!(AppConfig::new().with_log_level("loud").validate().is_err());
        assert!(AppConfig::new().with_log_level("DEBUG").validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&temp_dir.path().join("none.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("menuboard.toml");

        let config = AppConfig::new()
            .with_restaurant_name("Harbour Grill")
            .with_currency_symbol("$")
            .with_seed_menu(false);
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("menuboard.toml");
        fs::write(&path, "currency_symbol = \"EUR \"\n").unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.currency_symbol, "EUR ");
        assert_eq!(loaded.restaurant_name, "Christoteffel Restaurant");
        assert!(loaded.seed_menu);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("menuboard.toml");
        fs::write(&path, "tick_rate_ms = 1\n").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(MenuBoardError::Config(_))
        ));
    }

    #[test]
    fn test_config_file_path() {
        let path = AppConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("menuboard.toml"));
    }
}
