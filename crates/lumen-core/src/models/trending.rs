use std::fmt;

use serde::{Deserialize, Serialize};

/// A hashtag in the trending feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingTopic {
    /// Normalized: no leading `#`, lowercase.
    pub hashtag: String,
    pub count: u64,
    /// Percentage change against the previous window; 100 marks a new topic.
    pub growth: f64,
    pub category: TrendCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendCategory {
    Rising,
    Hot,
    Steady,
}

impl TrendCategory {
    /// Flat bonus added to the ranking score.
    pub fn rank_bonus(self) -> f64 {
        match self {
            TrendCategory::Rising => 5.0,
            TrendCategory::Hot => 3.0,
            TrendCategory::Steady => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrendCategory::Rising => "rising",
            TrendCategory::Hot => "hot",
            TrendCategory::Steady => "steady",
        }
    }
}

impl fmt::Display for TrendCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable trend cache record, stored as JSON under a scoped key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendCacheEntry {
    /// Write time, epoch milliseconds.
    pub timestamp: i64,
    pub data: Vec<TrendingTopic>,
}

/// Strip surrounding whitespace and any leading `#`, then lowercase.
pub fn normalize_hashtag(raw: &str) -> String {
    raw.trim().trim_start_matches('#').to_lowercase()
}
