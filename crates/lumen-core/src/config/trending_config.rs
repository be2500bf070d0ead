use serde::{Deserialize, Serialize};

use super::defaults;

/// Upper bound for `window_hours`: one year.
pub const MAX_WINDOW_HOURS: i64 = 24 * 366;
/// Upper bound for `weekly_days`: one year.
pub const MAX_WEEKLY_DAYS: i64 = 366;

/// Client-side trending aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingConfig {
    /// Width of the `recent` and `previous` windows (hours).
    pub window_hours: i64,
    /// Width of the `weekly` window (days).
    pub weekly_days: i64,
    /// Number of topics kept after ranking.
    pub max_topics: usize,
    /// Lifetime of the in-process memo (seconds).
    pub memo_ttl_secs: u64,
    /// Occurrences credited per hashtag of every active ad.
    pub ad_weight: u64,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            window_hours: defaults::DEFAULT_WINDOW_HOURS,
            weekly_days: defaults::DEFAULT_WEEKLY_DAYS,
            max_topics: defaults::DEFAULT_MAX_TOPICS,
            memo_ttl_secs: defaults::DEFAULT_MEMO_TTL_SECS,
            ad_weight: defaults::DEFAULT_AD_WEIGHT,
        }
    }
}

impl TrendingConfig {
    /// Reject window widths that are not positive or exceed one year.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_WINDOW_HOURS).contains(&self.window_hours) {
            return Err(format!(
                "trending.window_hours must be within 1..={MAX_WINDOW_HOURS}, got {}",
                self.window_hours
            ));
        }
        if !(1..=MAX_WEEKLY_DAYS).contains(&self.weekly_days) {
            return Err(format!(
                "trending.weekly_days must be within 1..={MAX_WEEKLY_DAYS}, got {}",
                self.weekly_days
            ));
        }
        Ok(())
    }
}
