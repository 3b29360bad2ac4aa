//! Report configuration
//!
//! Truncation limits for every ranked view. Defaults match the dashboard
//! the report feeds; a TOML file may override any subset of them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for the analytics engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Category/location shortages kept.
    pub shortage_limit: usize,
    /// Start-hour buckets kept.
    pub demand_window_limit: usize,
    /// Unbooked machines listed.
    pub low_utilization_limit: usize,
    /// Most-booked machines listed.
    pub top_machines_limit: usize,
    /// Machines with the highest average price.
    pub price_trend_limit: usize,
    /// Regions in the supply-versus-demand view.
    pub supply_demand_limit: usize,
    /// Regions in the income view.
    pub income_region_limit: usize,
    /// Regions in the demand-score view.
    pub regional_demand_limit: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            shortage_limit: 5,
            demand_window_limit: 6,
            low_utilization_limit: 10,
            top_machines_limit: 10,
            price_trend_limit: 10,
            supply_demand_limit: 10,
            income_region_limit: 10,
            regional_demand_limit: 5,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load from a TOML file. Keys not present keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}
