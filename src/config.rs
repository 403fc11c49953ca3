//! Configuration management for Lookback
//!
//! This module handles loading, validating, and managing configuration
//! for the history browser: fixture generation, day boundaries, display
//! defaults and logging.

use crate::calendar::Calendar;
use crate::error::{Error, Result};
use crate::fixture::DEFAULT_RECORD_COUNT;
use crate::types::ViewMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".lookback.json";

/// Default maximum number of records printed by list-style commands
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Default timestamp format for rendered records
pub const DEFAULT_TIME_FORMAT: &str = "%m/%d %H:%M";

/// Main configuration structure for Lookback
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixture generation settings
    pub fixture: FixtureConfig,

    /// Day boundary settings
    pub calendar: CalendarConfig,

    /// Rendering defaults
    pub display: DisplayConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Configuration for the generated history fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Number of records to generate
    pub record_count: usize,

    /// Seed for deterministic generation (random when absent)
    pub seed: Option<u64>,

    /// JSON file to read records from instead of generating them
    pub path: Option<PathBuf>,
}

/// Configuration for calendar day boundaries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Offset from UTC in minutes; the machine's local offset when absent
    pub utc_offset_minutes: Option<i32>,
}

/// Configuration for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// View used by the interactive browser at startup
    pub default_view: ViewMode,

    /// Maximum number of records printed by list-style commands
    pub max_results: usize,

    /// chrono format string for timestamps
    pub time_format: String,
}

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            seed: None,
            path: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_view: ViewMode::List,
            max_results: DEFAULT_MAX_RESULTS,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    ///
    /// A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or(Error::HomeDirectoryNotFound)?;
        Ok(home.join(DEFAULT_CONFIG_FILE))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.fixture.record_count == 0 && self.fixture.path.is_none() {
            return Err(Error::config_validation(
                "fixture.record_count",
                "must be greater than 0",
            ));
        }

        if let Some(minutes) = self.calendar.utc_offset_minutes {
            if Calendar::with_offset_minutes(minutes).is_none() {
                return Err(Error::config_validation(
                    "calendar.utc_offset_minutes",
                    "must be within +/- 1440 minutes",
                ));
            }
        }

        if self.display.max_results == 0 {
            return Err(Error::config_validation(
                "display.max_results",
                "must be greater than 0",
            ));
        }

        if self.display.time_format.trim().is_empty() {
            return Err(Error::config_validation(
                "display.time_format",
                "must not be empty",
            ));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(Error::config_validation(
                    "logging.level",
                    "must be one of: trace, debug, info, warn, error",
                ))
            }
        }

        Ok(())
    }

    /// Merge with another configuration, taking values from the other config
    pub fn merge(&mut self, other: &Config) {
        self.fixture = other.fixture.clone();
        self.calendar = other.calendar.clone();
        self.display = other.display.clone();
        self.logging = other.logging.clone();
    }

    /// The calendar described by this configuration
    pub fn calendar(&self) -> Calendar {
        self.calendar
            .utc_offset_minutes
            .and_then(Calendar::with_offset_minutes)
            .unwrap_or_else(Calendar::local)
    }
}
