//! Persistent CLI settings.
//!
//! Settings are read from a JSON file: the `--config` path when given,
//! otherwise `settings.json` in the platform config directory. Missing files
//! and missing fields fall back to defaults.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use ventana_lib::{
    CalendarBounds, CalendarRegistry, ClientConfig, ExchangeCalendar, Instrument, XMEX,
};

/// HTTP client parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct FetchSettings {
    pub(crate) concurrency: usize,
    pub(crate) timeout_secs: u64,
    pub(crate) max_retries: u32,
}

impl Default for FetchSettings {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            concurrency: client.concurrency,
            timeout_secs: client.timeout.as_secs(),
            max_retries: client.max_retries,
        }
    }
}

/// Settings shared by all subcommands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Exchange code of the trading calendar.
    pub(crate) exchange: String,
    /// Dates the calendar covers.
    pub(crate) calendar: CalendarBounds,
    /// Instrument used when none is given on the command line.
    pub(crate) default_instrument: Instrument,
    /// Default first date of `history` downloads.
    pub(crate) history_start: NaiveDate,
    pub(crate) fetch: FetchSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exchange: XMEX.to_string(),
            calendar: CalendarBounds::default(),
            default_instrument: Instrument::Govt,
            history_start: NaiveDate::from_ymd_opt(2001, 1, 1).unwrap_or(NaiveDate::MIN),
            fetch: FetchSettings::default(),
        }
    }
}

impl Settings {
    /// Returns the platform settings file path, if a home directory exists.
    ///
    /// - Linux: `~/.config/ventana/settings.json`
    /// - macOS: `~/Library/Application Support/ventana/settings.json`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\ventana\config\settings.json`
    pub(crate) fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ventana").map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Loads settings from `path`, or from the platform path when `None`.
    ///
    /// An explicit path must exist; the platform file is optional.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => {
                    tracing::debug!("no settings file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Builds the trading calendar described by the settings.
    pub(crate) fn calendar(&self) -> Result<Box<dyn ExchangeCalendar>> {
        let registry = CalendarRegistry::global();
        registry
            .with_bounds(&self.exchange, self.calendar)
            .with_context(|| {
                format!(
                    "Unsupported exchange: {} (expected one of: {})",
                    self.exchange,
                    registry.codes().join(", ")
                )
            })
    }

    /// Builds the HTTP client configuration.
    pub(crate) fn client_config(&self) -> ClientConfig {
        ClientConfig {
            concurrency: self.fetch.concurrency,
            timeout: Duration::from_secs(self.fetch.timeout_secs),
            max_retries: self.fetch.max_retries,
            ..ClientConfig::default()
        }
    }
}
