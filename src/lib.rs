//! collapsebar - Collapsing top bar demo
//!
//! A terminal screen with a pinned top app bar, a scroll-reactive header
//! image and three swipeable tabs of lazily rendered placeholder rows.

use std::fmt;

pub mod app;
pub mod assets;
pub mod config;
pub mod models;
pub mod pager;
pub mod scroll;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum CollapseBarError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Bundled asset could not be resolved
    AssetError(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for CollapseBarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollapseBarError::IoError(err) => write!(f, "I/O error: {}", err),
            CollapseBarError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CollapseBarError::AssetError(msg) => write!(f, "Asset error: {}", msg),
            CollapseBarError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for CollapseBarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollapseBarError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CollapseBarError {
    fn from(err: std::io::Error) -> Self {
        CollapseBarError::IoError(err)
    }
}

impl From<toml::de::Error> for CollapseBarError {
    fn from(err: toml::de::Error) -> Self {
        CollapseBarError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for collapsebar operations
pub type Result<T> = std::result::Result<T, CollapseBarError>;

/// Error handling utilities
pub mod error {
    use super::CollapseBarError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &CollapseBarError) -> String {
        match error {
            CollapseBarError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            CollapseBarError::AssetError(_) => {
                "A bundled asset is missing. The binary may be corrupt; rebuild it.".to_string()
            }
            CollapseBarError::TuiError(_) => {
                "The terminal could not be driven. Try a larger window or another terminal."
                    .to_string()
            }
            CollapseBarError::IoError(_) => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "collapsebar";
pub const CONFIG_FILE: &str = "collapsebar.toml";
pub const CONFIG_ENV: &str = "COLLAPSEBAR_CONFIG";
pub const LOG_FILE: &str = "collapsebar.log";
