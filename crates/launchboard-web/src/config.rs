//! Configuration loading for Launchboard.
//! Reads launchboard.toml from the current directory or path in
//! LAUNCHBOARD_CONFIG env var. A missing file falls back to defaults; a
//! malformed file is fatal.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub slider: SliderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: "data/spacex_launch_dash.csv".to_string(),
        }
    }
}

/// Scale of the payload range slider. The slider's initial value comes
/// from the dataset's own payload bounds, not from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min_kg: f64,
    pub max_kg: f64,
    pub step_kg: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min_kg: 0.0,
            max_kg: 10_000.0,
            step_kg: 1_000.0,
        }
    }
}

impl Config {
    /// Load configuration from launchboard.toml.
    /// Checks LAUNCHBOARD_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("LAUNCHBOARD_CONFIG")
            .unwrap_or_else(|_| "launchboard.toml".to_string());

        if !Path::new(&path).exists() {
            info!("Config file {} not found, using defaults", path);
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
