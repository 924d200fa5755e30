//! Dashboard configuration, stored as TOML.
//!
//! A missing file yields defaults; a malformed file is an error.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::tabs::Tab;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Logging settings for the shells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info` or `fitlab_core=debug`.
    pub level: String,
    /// Log file for the terminal UI; stderr is unusable while it runs.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Tab shown at start-up.
    pub start_tab: Tab,
    /// JSON catalog to use instead of the built-in fixtures.
    pub fixtures: Option<PathBuf>,
    /// Fixed reference date for date-relative queries.
    pub today: Option<NaiveDate>,
    /// Days ahead of the due date at which equipment is flagged.
    pub calibration_warning_days: u32,
    pub log: LogSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            start_tab: Tab::Dashboard,
            fixtures: None,
            today: None,
            calibration_warning_days: 14,
            log: LogSettings::default(),
        }
    }
}

impl DashboardConfig {
    /// `<config dir>/fitlab/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fitlab").join("config.toml"))
    }

    /// Load from a TOML file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// An explicit path must exist; the default path may be absent.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "loaded config");
                Self::from_toml(&content)
            }
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// The configured JSON catalog, or the built-in fixtures.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.fixtures {
            Some(path) => Catalog::from_path(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Reference date: configured date, then the catalog snapshot date, then the local date.
    pub fn today(&self, catalog: &Catalog) -> NaiveDate {
        self.today.unwrap_or_else(|| catalog.reference_date())
    }
}
