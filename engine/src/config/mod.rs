//! Configuration management
//!
//! This module handles loading and validation of the examhub configuration.
//! Configuration is stored in TOML format at ~/.examhub/config.toml.
//!
//! # Configuration Sections
//!
//! - **core**: Log level
//! - **settings**: Starting theme of the theme registry
//! - **exam**: Exam delivery mode (online, offline)
//! - **walkthrough**: Inputs used by the `demo` walkthrough
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration. Unlike an interactive setup, a missing default
//! file is never created on disk.
//!
//! # Examples
//!
//! ```no_run
//! use examhub_engine::config::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load_or_default()?;
//!
//! println!("Theme: {}", config.settings.theme);
//! println!("Exam mode: {}", config.exam.mode);
//! # Ok(())
//! # }
//! ```

use crate::exam::ExamMode;
use crate::settings::DEFAULT_THEME;
use crate::stakeholders::MAX_ROSTER_SIZE;
use sdk::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Accepted values for `core.log_level`
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Core engine settings
    #[serde(default)]
    pub core: CoreConfig,

    /// Theme settings
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Exam settings
    #[serde(default)]
    pub exam: ExamConfig,

    /// Walkthrough inputs
    #[serde(default)]
    pub walkthrough: WalkthroughConfig,
}

/// Core engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Theme the registry starts with
    #[serde(default = "default_theme")]
    pub theme: String,
}

/// Exam configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamConfig {
    /// Delivery mode used by `demo` and by `exam` without `--mode`
    #[serde(default)]
    pub mode: ExamMode,
}

/// Inputs for the demo walkthrough
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkthroughConfig {
    /// Number of stakeholders traversed
    #[serde(default = "default_stakeholders")]
    pub stakeholders: usize,

    /// Sender tag handed to the notification channel
    #[serde(default = "default_sender")]
    pub sender: String,

    #[serde(default = "default_mediator_message")]
    pub mediator_message: String,

    #[serde(default = "default_email_message")]
    pub email_message: String,

    #[serde(default = "default_realtime_message")]
    pub realtime_message: String,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_stakeholders() -> usize {
    2
}

fn default_sender() -> String {
    "User".to_string()
}

fn default_mediator_message() -> String {
    "Hello, Mediator!".to_string()
}

fn default_email_message() -> String {
    "Important message".to_string()
}

fn default_realtime_message() -> String {
    "New message in real-time".to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            stakeholders: default_stakeholders(),
            sender: default_sender(),
            mediator_message: default_mediator_message(),
            email_message: default_email_message(),
            realtime_message: default_realtime_message(),
        }
    }
}

impl Config {
    /// Load configuration from the default location (~/.examhub/config.toml)
    ///
    /// Falls back to built-in defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The home directory cannot be determined
    /// - The file exists but cannot be read or parsed
    /// - Validation fails
    pub fn load_or_default() -> Result<Self, EngineError> {
        let config_path = Self::default_config_path()?;

        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    pub fn load_from_path(path: &Path) -> Result<Self, EngineError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, EngineError> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| EngineError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, EngineError> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Get the default configuration file path (~/.examhub/config.toml)
    pub fn default_config_path() -> Result<PathBuf, EngineError> {
        let home = dirs::home_dir()
            .ok_or_else(|| EngineError::Config("Could not determine home directory".to_string()))?;

        Ok(home.join(".examhub").join("config.toml"))
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The log level is not one of [`VALID_LOG_LEVELS`]
    /// - `walkthrough.stakeholders` exceeds [`MAX_ROSTER_SIZE`]
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_log_level(&self.core.log_level)?;

        if self.walkthrough.stakeholders > MAX_ROSTER_SIZE {
            return Err(EngineError::Config(format!(
                "walkthrough.stakeholders must be at most {}",
                MAX_ROSTER_SIZE
            )));
        }

        Ok(())
    }
}

/// Check a log level name against [`VALID_LOG_LEVELS`]
pub fn validate_log_level(level: &str) -> Result<(), EngineError> {
    if VALID_LOG_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(EngineError::Config(format!(
            "Invalid log level '{}'. Must be one of: {}",
            level,
            VALID_LOG_LEVELS.join(", ")
        )))
    }
}
