//! Dashboard configuration file support.
//!
//! This module provides utilities for reading dashboard configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::controls::DEFAULT_PAYLOAD_CEILING;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub controls: ControlSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Dataset source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// Path of the launch-records CSV read once at process start.
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

/// Control domain settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlSettings {
    /// Fixed upper bound of the payload slider, independent of the data.
    #[serde(default = "default_payload_ceiling")]
    pub payload_ceiling: f64,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            payload_ceiling: default_payload_ceiling(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/spacex_launch_dash.csv")
}

fn default_payload_ceiling() -> f64 {
    DEFAULT_PAYLOAD_CEILING
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl DashboardConfig {
    /// Load dashboard configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: DashboardConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load dashboard configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in the current directory and its
    /// parent. Falls back to all-default settings if no file is found,
    /// since every field has a working default.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }
}
