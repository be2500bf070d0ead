use serde::{Deserialize, Serialize};

use super::defaults;

/// Remote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Base URL all endpoint paths are appended to.
    pub base_url: String,
    /// Per-request timeout enforced by the HTTP client (seconds).
    pub timeout_secs: u64,
    /// Optional bearer token sent with every request.
    pub bearer_token: Option<String>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
            bearer_token: None,
        }
    }
}
