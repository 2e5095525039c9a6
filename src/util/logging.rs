//! Log setup
//!
//! The terminal UI owns stdout, so log output goes to a file under the
//! user data directory.

use crate::{MenuBoardError, Result, APP_NAME, LOG_ENV_VAR, LOG_FILE};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Get the standard log file path
/// Uses $DATA_HOME/menuboard/menuboard.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        MenuBoardError::Logging("Unable to determine data directory".to_string())
    })?;

    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Build the log filter, preferring MENUBOARD_LOG over the configured level
pub fn build_filter(default_level: &str) -> EnvFilter {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    EnvFilter::new(filter_directives(env_value.as_deref(), default_level))
}

/// Directive string for the subscriber
///
/// A non-blank MENUBOARD_LOG value is used verbatim, otherwise the
/// configured level applies to this crate only.
fn filter_directives(env_value: Option<&str>, default_level: &str) -> String {
    match env_value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => format!("{}={}", APP_NAME, default_level),
    }
}

/// Install the global subscriber writing to the standard log file
///
/// Returns the path that log lines are appended to.
pub fn init_file_logger(default_level: &str) -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| MenuBoardError::Logging(format!("Failed to install subscriber: {}", e)))?;

    Ok(path)
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            MenuBoardError::Logging(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            MenuBoardError::Logging(format!("Failed to open log file {}: {}", path.display(), e))
        })
}
