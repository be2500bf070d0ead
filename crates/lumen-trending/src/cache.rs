//! Storage-backed cache in front of the remote trending endpoint.
//!
//! Fresh entry → served without a network call. Otherwise the remote is
//! asked; a successful answer is persisted as a [`TrendCacheEntry`]. When
//! the remote fails, whatever entry storage still holds is served
//! regardless of age, or nothing at all. Storage faults count as misses.

use std::sync::Arc;

use tracing::{debug, info, warn, Instrument};

use lumen_core::config::CacheConfig;
use lumen_core::errors::{CloudError, StorageError};
use lumen_core::models::{
    normalize_hashtag, TrendCacheEntry, TrendCategory, TrendCount, TrendingTopic,
};
use lumen_core::traits::{IClock, IKeyValueStore, IRemoteTrending, SystemClock};
use lumen_observability::degradation::components;
use lumen_observability::{trend_fetch_span, DegradationTracker};

const HOT_MIN_COUNT: u64 = 10;
const RISING_MIN_COUNT: u64 = 5;

/// Storage key for one `(limit, hours)` request.
pub fn cache_key(prefix: &str, limit: usize, hours: u32) -> String {
    format!("{prefix}_{limit}_{hours}")
}

/// Server aggregates carry no growth, so the category comes from the count.
pub fn topic_from_count(count: &TrendCount) -> TrendingTopic {
    let category = if count.count >= HOT_MIN_COUNT {
        TrendCategory::Hot
    } else if count.count >= RISING_MIN_COUNT {
        TrendCategory::Rising
    } else {
        TrendCategory::Steady
    };
    TrendingTopic {
        hashtag: normalize_hashtag(&count.id),
        count: count.count,
        growth: 0.0,
        category,
    }
}

pub struct TrendCache<R> {
    remote: R,
    store: Arc<dyn IKeyValueStore>,
    clock: Arc<dyn IClock>,
    config: CacheConfig,
    degradation: Option<Arc<DegradationTracker>>,
}

impl<R: IRemoteTrending> TrendCache<R> {
    pub fn new(remote: R, store: Arc<dyn IKeyValueStore>, config: CacheConfig) -> Self {
        Self {
            remote,
            store,
            clock: Arc::new(SystemClock),
            config,
            degradation: None,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn IClock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_degradation_tracker(mut self, tracker: Arc<DegradationTracker>) -> Self {
        self.degradation = Some(tracker);
        self
    }

    fn ttl_millis(&self) -> i64 {
        i64::try_from(self.config.ttl_secs)
            .unwrap_or(i64::MAX / 1_000)
            .saturating_mul(1_000)
    }

    /// Trending topics for `(limit, hours)`. Never fails: the worst case is
    /// an empty list.
    pub async fn fetch(&self, limit: usize, hours: u32) -> Vec<TrendingTopic> {
        let key = cache_key(&self.config.key_prefix, limit, hours);
        self.fetch_keyed(&key, limit, hours)
            .instrument(trend_fetch_span!(limit, hours))
            .await
    }

    async fn fetch_keyed(&self, key: &str, limit: usize, hours: u32) -> Vec<TrendingTopic> {
        let now_ms = self.clock.now_millis();
        if let Some(entry) = self.read(key) {
            let age = now_ms - entry.timestamp;
            if age < self.ttl_millis() {
                debug!(key, age_ms = age, topics = entry.data.len(), "trend cache hit");
                return entry.data;
            }
            debug!(key, age_ms = age, "trend cache entry expired");
        }

        let failure = match self.remote.fetch_trending(limit, hours).await {
            Ok(response) if response.success => {
                let topics: Vec<TrendingTopic> =
                    response.data.iter().map(topic_from_count).collect();
                self.write(
                    key,
                    &TrendCacheEntry {
                        timestamp: now_ms,
                        data: topics.clone(),
                    },
                );
                if let Some(tracker) = &self.degradation {
                    tracker.mark_recovered(components::TREND_FETCH, self.clock.now());
                }
                info!(key, topics = topics.len(), "trending topics refreshed");
                return topics;
            }
            Ok(_) => CloudError::Unsuccessful {
                endpoint: "trending".into(),
            }
            .to_string(),
            Err(e) => e.to_string(),
        };

        let stale = self.read(key);
        let fallback = if stale.is_some() { "stale cache entry" } else { "empty list" };
        match &self.degradation {
            Some(tracker) => tracker.record_fallback(
                components::TREND_FETCH,
                failure,
                fallback,
                self.clock.now(),
            ),
            None => warn!(key, %failure, fallback, "trend fetch failed"),
        }
        stale.map(|entry| entry.data).unwrap_or_default()
    }

    /// Decoded entry under `key`; any storage or decode fault reads as a miss.
    fn read(&self, key: &str) -> Option<TrendCacheEntry> {
        let raw = match self.store.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                self.storage_fault("read", e.to_string());
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                let err = StorageError::Serialization {
                    message: e.to_string(),
                };
                self.storage_fault("decode", err.to_string());
                None
            }
        }
    }

    fn write(&self, key: &str, entry: &TrendCacheEntry) {
        let result = serde_json::to_string(entry)
            .map_err(|e| e.to_string())
            .and_then(|json| self.store.set(key, &json).map_err(|e| e.to_string()));
        if let Err(reason) = result {
            self.storage_fault("write", reason);
        }
    }

    fn storage_fault(&self, op: &str, reason: String) {
        warn!(op, %reason, "trend cache storage fault, treating as miss");
        if let Some(tracker) = &self.degradation {
            tracker.record_fallback(
                components::TREND_STORAGE,
                format!("{op}: {reason}"),
                "cache miss",
                self.clock.now(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(id: &str, count: u64) -> TrendCount {
        TrendCount {
            id: id.into(),
            count,
        }
    }

    #[test]
    fn key_format() {
        assert_eq!(cache_key("trending_topics", 10, 24), "trending_topics_10_24");
    }

    #[test]
    fn category_thresholds() {
        assert_eq!(topic_from_count(&count("a", 10)).category, TrendCategory::Hot);
        assert_eq!(topic_from_count(&count("a", 9)).category, TrendCategory::Rising);
        assert_eq!(topic_from_count(&count("a", 5)).category, TrendCategory::Rising);
        assert_eq!(topic_from_count(&count("a", 4)).category, TrendCategory::Steady);
    }

    #[test]
    fn hashtag_is_normalized_and_growth_zero() {
        let topic = topic_from_count(&count("#RustLang", 3));
        assert_eq!(topic.hashtag, "rustlang");
        assert_eq!(topic.growth, 0.0);
        assert_eq!(topic.count, 3);
    }
}
