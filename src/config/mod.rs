//! Configuration management module
//!
//! Handles loading and validation of the screen configuration: display
//! metrics, header sizing and animation timings.

use crate::{CollapseBarError, Result, APP_NAME, CONFIG_ENV, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level screen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Title shown centered in the top app bar
    pub title: String,
    /// Terminal display metrics
    pub display: DisplayConfig,
    /// Header image sizing
    pub header: HeaderConfig,
    /// Animation timings
    pub animation: AnimationConfig,
}

/// How terminal cells map to density-independent units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Nominal height of one terminal row in dp
    pub cell_height_dp: f32,
    /// Pixels per dp; detected from the terminal when unset
    pub density: Option<f32>,
}

/// Header image region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Rows the fill-width image may occupy before it is cropped
    pub max_rows: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Expand/fade and shrink/fade of the header image
    #[serde(with = "crate::util::duration")]
    pub header_transition: Duration,
    /// Animated scroll to a selected tab's page
    #[serde(with = "crate::util::duration")]
    pub page_scroll: Duration,
    /// Redraw interval while something is animating
    #[serde(with = "crate::util::duration")]
    pub frame_interval: Duration,
    /// Event poll timeout while idle
    #[serde(with = "crate::util::duration")]
    pub idle_tick: Duration,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            title: "Artist Details".to_string(),
            display: DisplayConfig::default(),
            header: HeaderConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_height_dp: 16.0,
            density: None,
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { max_rows: 10 }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            header_transition: Duration::from_millis(300),
            page_scroll: Duration::from_millis(300),
            frame_interval: Duration::from_millis(16),
            idle_tick: Duration::from_millis(250),
        }
    }
}

impl ScreenConfig {
    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CollapseBarError::ConfigError(
                "Title must not be empty".to_string(),
            ));
        }

        if !(self.display.cell_height_dp > 0.0) {
            return Err(CollapseBarError::ConfigError(
                "Cell height must be greater than 0 dp".to_string(),
            ));
        }

        if let Some(density) = self.display.density {
            if !(density > 0.0) {
                return Err(CollapseBarError::ConfigError(format!(
                    "Density must be greater than 0 (got {})",
                    density
                )));
            }
        }

        if self.header.max_rows == 0 {
            return Err(CollapseBarError::ConfigError(
                "Header must be allowed at least one row".to_string(),
            ));
        }

        const MAX_ANIMATION: Duration = Duration::from_secs(5);
        let timings = [
            ("header_transition", self.animation.header_transition),
            ("page_scroll", self.animation.page_scroll),
            ("frame_interval", self.animation.frame_interval),
            ("idle_tick", self.animation.idle_tick),
        ];
        for (name, value) in timings {
            if value.is_zero() {
                return Err(CollapseBarError::ConfigError(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
            if value > MAX_ANIMATION {
                return Err(CollapseBarError::ConfigError(format!(
                    "{} too long: {} (max: {})",
                    name,
                    humantime::format_duration(value),
                    humantime::format_duration(MAX_ANIMATION)
                )));
            }
        }

        if self.animation.frame_interval > self.animation.idle_tick {
            return Err(CollapseBarError::ConfigError(
                "frame_interval must not exceed idle_tick".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::info!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CollapseBarError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| match e {
            CollapseBarError::ConfigError(msg) => {
                CollapseBarError::ConfigError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Get the configuration file path
    /// Uses $COLLAPSEBAR_CONFIG when set, otherwise $CONFIG_HOME/collapsebar/collapsebar.toml
    pub fn config_file_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir().ok_or_else(|| {
            CollapseBarError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
