//! Default values for every config section.

// Search
pub const DEFAULT_REMOTE_AUGMENTATION: bool = true;
pub const DEFAULT_POPULARITY_BOOST: bool = true;
pub const DEFAULT_SUGGESTION_LIMIT: usize = crate::constants::MAX_SUGGESTIONS;

// Trending aggregation
pub const DEFAULT_WINDOW_HOURS: i64 = 24;
pub const DEFAULT_WEEKLY_DAYS: i64 = 7;
pub const DEFAULT_MAX_TOPICS: usize = 15;
pub const DEFAULT_MEMO_TTL_SECS: u64 = 300;
pub const DEFAULT_AD_WEIGHT: u64 = 3;

// Durable trend cache
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

// Storage
pub const DEFAULT_DB_PATH: &str = "lumen.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// Cloud
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
