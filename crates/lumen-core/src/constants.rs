/// Lumen system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of topics requested from the remote trending endpoint.
pub const DEFAULT_TREND_LIMIT: usize = 10;

/// Default look-back window (hours) for the remote trending endpoint.
pub const DEFAULT_TREND_HOURS: u32 = 24;

/// Prefix of durable trend cache keys: `{prefix}_{limit}_{hours}`.
pub const TREND_CACHE_KEY_PREFIX: &str = "trending_topics";

/// Growth value reported for a hashtag with no activity in the previous window.
pub const NEW_TOPIC_GROWTH: f64 = 100.0;

/// Shortest normalized hashtag eligible for the trending feed.
pub const MIN_TRENDING_HASHTAG_LEN: usize = 2;

/// Maximum number of autocomplete suggestions returned.
pub const MAX_SUGGESTIONS: usize = 8;

/// Content words must be longer than this to be offered as suggestions.
pub const MIN_SUGGESTION_WORD_LEN: usize = 3;
