use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::TREND_CACHE_KEY_PREFIX;

/// Durable trend cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Entries younger than this are served without a network call (seconds).
    pub ttl_secs: u64,
    /// Key prefix; the full key is `{prefix}_{limit}_{hours}`.
    pub key_prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
            key_prefix: TREND_CACHE_KEY_PREFIX.to_string(),
        }
    }
}
