pub mod defaults;

mod cache_config;
mod cloud_config;
mod observability_config;
mod search_config;
mod storage_config;
mod trending_config;

pub use cache_config::CacheConfig;
pub use cloud_config::CloudConfig;
pub use observability_config::ObservabilityConfig;
pub use search_config::SearchConfig;
pub use storage_config::StorageConfig;
pub use trending_config::{TrendingConfig, MAX_WEEKLY_DAYS, MAX_WINDOW_HOURS};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{LumenError, LumenResult};

/// Top-level configuration. Every section falls back to its defaults, so an
/// empty document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LumenConfig {
    pub search: SearchConfig,
    pub trending: TrendingConfig,
    pub cache: CacheConfig,
    pub storage: StorageConfig,
    pub cloud: CloudConfig,
    pub observability: ObservabilityConfig,
}

impl LumenConfig {
    /// Parse and validate a config from a TOML string.
    pub fn from_toml(toml_str: &str) -> LumenResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| LumenError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that deserialization alone cannot enforce.
    pub fn validate(&self) -> LumenResult<()> {
        self.trending
            .validate()
            .map_err(|reason| LumenError::Config { reason })
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> LumenResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LumenError::Config {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml(&content)
    }
}
