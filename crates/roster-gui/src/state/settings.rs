//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use roster_core::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use roster_fetch::FetchSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::{LogConfig, LogFormat, parse_level};

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Member service endpoint, timeouts and retries.
    pub fetch: FetchSettings,

    /// Grid display settings.
    pub display: DisplaySettings,

    /// Logging level, format and destination.
    pub logging: LoggingSettings,
}

/// Errors from writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to create config directory: {0}")]
    CreateDir(#[source] std::io::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write settings: {0}")]
    Write(#[source] std::io::Error),
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SettingsError::CreateDir)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(SettingsError::Write)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "RosterAdmin", "Roster Admin")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// DISPLAY SETTINGS
// =============================================================================

/// Grid display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Rows per page. Values outside the offered options fall back to the
    /// default.
    pub page_size: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE.get(),
        }
    }
}

impl DisplaySettings {
    /// The configured page size, if it is one of the offered options.
    pub fn page_size(&self) -> NonZeroUsize {
        if PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            NonZeroUsize::new(self.page_size).unwrap_or(DEFAULT_PAGE_SIZE)
        } else {
            DEFAULT_PAGE_SIZE
        }
    }
}

// =============================================================================
// LOGGING SETTINGS
// =============================================================================

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level name: `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,

    /// Output format.
    pub format: LogFormat,

    /// Write logs to this file instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LoggingSettings {
    /// Build the subscriber configuration.
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig::default()
            .with_level(parse_level(&self.level))
            .with_format(self.format)
            .with_log_file(self.log_file.clone())
    }
}
