//! Utility functions module
//!
//! Contains helpers for price and label formatting, and log setup.

pub mod format;
pub mod logging;

// Re-export commonly used functions
pub use format::{format_count_heading, format_price, format_rounded_price};
pub use logging::init_file_logger;
