//! menuboard - restaurant menu manager
//!
//! A terminal UI for listing, adding, removing and filtering menu items,
//! with a per-course average price summary.

pub mod app;
pub mod config;
pub mod models;
pub mod store;
pub mod util;

pub use models::{Course, CourseAverages, CourseFilter, MenuItem, MenuItemDraft, ValidationError};
pub use store::MenuStore;

// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MenuBoardError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Menu item rejected by the store
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    /// Log file or subscriber setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<toml::de::Error> for MenuBoardError {
    fn from(err: toml::de::Error) -> Self {
        MenuBoardError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for MenuBoardError {
    fn from(err: toml::ser::Error) -> Self {
        MenuBoardError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for menuboard operations
pub type Result<T> = std::result::Result<T, MenuBoardError>;

/// Error handling utilities
pub mod error {
    use super::MenuBoardError;
    use crate::models::ValidationError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &MenuBoardError) -> String {
        match error {
            MenuBoardError::Config(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            MenuBoardError::Validation(ValidationError::EmptyName) => {
                "Every menu item needs a name.".to_string()
            }
            MenuBoardError::Validation(ValidationError::MissingPrice) => {
                "Every menu item needs a price.".to_string()
            }
            MenuBoardError::Validation(ValidationError::InvalidPrice(raw)) => {
                format!("'{}' is not a valid price. Use a number like 45 or 12.50.", raw)
            }
            MenuBoardError::Logging(_) => {
                "Could not open the log file. Check permissions on the data directory."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_validation_messages() {
            let msg = user_friendly_message(&ValidationError::EmptyName.into());
            assert!(msg.contains("name"));

            let msg =
                user_friendly_message(&ValidationError::InvalidPrice("abc".to_string()).into());
            assert!(msg.contains("'abc'"));
        }

        #[test]
        fn test_config_message_has_hint() {
            let msg = user_friendly_message(&MenuBoardError::Config("bad".to_string()));
            assert!(msg.ends_with("Check your settings."));
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "menuboard";
pub const CONFIG_FILE: &str = "menuboard.toml";
pub const LOG_FILE: &str = "menuboard.log";
pub const LOG_ENV_VAR: &str = "MENUBOARD_LOG";
