use serde::{Deserialize, Serialize};

use super::defaults;

/// Search orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Query the remote directory to augment the local post/user corpus.
    pub remote_augmentation: bool,
    /// Add the logarithmic popularity term on top of textual relevance.
    pub popularity_boost: bool,
    /// Maximum number of autocomplete suggestions.
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            remote_augmentation: defaults::DEFAULT_REMOTE_AUGMENTATION,
            popularity_boost: defaults::DEFAULT_POPULARITY_BOOST,
            suggestion_limit: defaults::DEFAULT_SUGGESTION_LIMIT,
        }
    }
}
