//! TrendingEngine: the public trending entry point.

use std::sync::Arc;

use tracing::{debug, warn};

use lumen_core::config::{CacheConfig, LumenConfig, TrendingConfig};
use lumen_core::constants::{DEFAULT_TREND_HOURS, DEFAULT_TREND_LIMIT};
use lumen_core::models::{Ad, Post, TrendingTopic};
use lumen_core::traits::{IClock, IKeyValueStore, IRemoteTrending, OfflineRemote, SystemClock};
use lumen_observability::{trending_span, DegradationTracker};

use crate::aggregate;
use crate::cache::TrendCache;
use crate::memo::{self, TrendMemo};

/// Remote-backed trend fetches plus memoized client-side aggregation.
///
/// Every collaborator is injected; two engines never share a memo.
pub struct TrendingEngine<R = OfflineRemote> {
    cache: TrendCache<R>,
    memo: TrendMemo,
    clock: Arc<dyn IClock>,
    config: TrendingConfig,
}

impl TrendingEngine<OfflineRemote> {
    /// An engine without a remote: fetches serve whatever storage holds.
    pub fn new(store: Arc<dyn IKeyValueStore>, config: &LumenConfig) -> Self {
        Self::with_remote(OfflineRemote, store, config)
    }
}

impl<R: IRemoteTrending> TrendingEngine<R> {
    pub fn with_remote(remote: R, store: Arc<dyn IKeyValueStore>, config: &LumenConfig) -> Self {
        Self::from_parts(remote, store, config.trending.clone(), config.cache.clone())
    }

    pub fn from_parts(
        remote: R,
        store: Arc<dyn IKeyValueStore>,
        trending: TrendingConfig,
        cache: CacheConfig,
    ) -> Self {
        Self {
            cache: TrendCache::new(remote, store, cache),
            memo: TrendMemo::from_secs(trending.memo_ttl_secs),
            clock: Arc::new(SystemClock),
            config: trending,
        }
    }

    /// Replace the clock for both the memo and the durable cache.
    pub fn with_clock(mut self, clock: Arc<dyn IClock>) -> Self {
        self.cache = self.cache.with_clock(Arc::clone(&clock));
        self.clock = clock;
        self
    }

    pub fn with_degradation_tracker(mut self, tracker: Arc<DegradationTracker>) -> Self {
        self.cache = self.cache.with_degradation_tracker(tracker);
        self
    }

    /// Server-aggregated trending topics, cached in durable storage.
    pub async fn fetch_trending_topics(&self, limit: usize, hours: u32) -> Vec<TrendingTopic> {
        self.cache.fetch(limit, hours).await
    }

    /// [`fetch_trending_topics`](Self::fetch_trending_topics) with the
    /// default limit of 10 over 24 hours.
    pub async fn fetch_default_trending_topics(&self) -> Vec<TrendingTopic> {
        self.fetch_trending_topics(DEFAULT_TREND_LIMIT, DEFAULT_TREND_HOURS)
            .await
    }

    /// Client-side trending over the given corpus, memoized per argument
    /// fingerprint for the memo TTL.
    pub fn trending_topics(&self, posts: &[Post], ads: &[Ad]) -> Vec<TrendingTopic> {
        let span = trending_span!(posts.len(), ads.len());
        let _entered = span.enter();

        let now = self.clock.now();
        let key = match memo::fingerprint(posts, ads) {
            Ok(key) => Some(key),
            Err(e) => {
                warn!(error = %e, "could not fingerprint trending input, skipping memo");
                None
            }
        };

        if let Some(hit) = key.as_deref().and_then(|k| self.memo.get(k, now)) {
            debug!(topics = hit.len(), "trending memo hit");
            return hit;
        }

        let topics = aggregate::compute_trending(posts, ads, now, &self.config);
        if let Some(key) = key {
            self.memo.insert(key, topics.clone(), now);
        }
        topics
    }

    /// Drop every memoized aggregation. Durable storage is untouched.
    pub fn clear_cache(&self) {
        self.memo.clear();
    }

    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}
