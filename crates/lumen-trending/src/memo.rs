//! In-process memo for client-side trend aggregation.
//!
//! Keyed by a blake3 fingerprint of the (posts, ads) arguments; entries
//! expire after a fixed TTL measured against the caller's clock.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use lumen_core::errors::LumenResult;
use lumen_core::models::{Ad, Post, TrendingTopic};

#[derive(Debug, Clone)]
struct MemoEntry {
    stored_at: DateTime<Utc>,
    topics: Vec<TrendingTopic>,
}

/// Concurrent TTL map from argument fingerprint to computed topics.
#[derive(Debug)]
pub struct TrendMemo {
    entries: DashMap<String, MemoEntry>,
    ttl: Duration,
}

impl TrendMemo {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn from_secs(ttl_secs: u64) -> Self {
        Self::new(Duration::seconds(ttl_secs.min(u64::from(u32::MAX)) as i64))
    }

    fn is_fresh(&self, entry: &MemoEntry, now: DateTime<Utc>) -> bool {
        now - entry.stored_at < self.ttl
    }

    /// Topics stored under `key`, if still fresh at `now`.
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<Vec<TrendingTopic>> {
        self.entries
            .get(key)
            .filter(|entry| self.is_fresh(entry, now))
            .map(|entry| entry.topics.clone())
    }

    /// Store `topics` under `key`, dropping anything already expired.
    pub fn insert(&self, key: String, topics: Vec<TrendingTopic>, now: DateTime<Utc>) {
        self.entries.retain(|_, entry| now - entry.stored_at < self.ttl);
        self.entries.insert(
            key,
            MemoEntry {
                stored_at: now,
                topics,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

/// Content fingerprint of an aggregation call's arguments.
pub fn fingerprint(posts: &[Post], ads: &[Ad]) -> LumenResult<String> {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&serde_json::to_vec(posts)?);
    hasher.update(b"\x00ads\x00");
    hasher.update(&serde_json::to_vec(ads)?);
    Ok(hasher.finalize().to_hex().to_string())
}
