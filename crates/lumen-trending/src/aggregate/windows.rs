//! Rolling windows anchored on "now" and per-hashtag occurrence counts.
//!
//! `recent` is `[now − window, ∞)`, so future-dated posts count as recent.
//! `previous` is `[now − 2·window, now − window)`. `weekly` is
//! `[now − weekly_days, ∞)`.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, Utc};

use lumen_core::config::TrendingConfig;
use lumen_core::models::{normalize_hashtag, Ad, Post};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCounts {
    pub recent: u64,
    pub previous: u64,
    pub weekly: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Windows {
    recent_start: DateTime<Utc>,
    previous_start: DateTime<Utc>,
    weekly_start: DateTime<Utc>,
}

impl Windows {
    /// Window starts saturate at the earliest representable instant, so
    /// oversized widths widen the windows instead of overflowing.
    pub fn anchored(now: DateTime<Utc>, config: &TrendingConfig) -> Self {
        let window = Duration::try_hours(config.window_hours).unwrap_or(Duration::MAX);
        let weekly = Duration::try_days(config.weekly_days).unwrap_or(Duration::MAX);
        let recent_start = back(now, window);
        Self {
            recent_start,
            previous_start: back(recent_start, window),
            weekly_start: back(now, weekly),
        }
    }

    pub fn is_recent(&self, at: DateTime<Utc>) -> bool {
        at >= self.recent_start
    }

    pub fn is_previous(&self, at: DateTime<Utc>) -> bool {
        at >= self.previous_start && at < self.recent_start
    }

    pub fn is_weekly(&self, at: DateTime<Utc>) -> bool {
        at >= self.weekly_start
    }

    /// Add one post's worth of occurrences dated `at`.
    fn credit(&self, counts: &mut WindowCounts, at: DateTime<Utc>) {
        if self.is_recent(at) {
            counts.recent += 1;
        }
        if self.is_previous(at) {
            counts.previous += 1;
        }
        if self.is_weekly(at) {
            counts.weekly += 1;
        }
    }
}

fn back(from: DateTime<Utc>, by: Duration) -> DateTime<Utc> {
    from.checked_sub_signed(by).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Normalized, de-duplicated hashtags of one entity.
fn distinct_tags(raw: &[String]) -> BTreeSet<String> {
    raw.iter()
        .map(|t| normalize_hashtag(t))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Count windowed occurrences per normalized hashtag. A post credits each of
/// its distinct tags once; an active ad credits `ad_weight` to the recent and
/// weekly windows of each of its tags.
pub fn tally(
    posts: &[Post],
    ads: &[Ad],
    windows: &Windows,
    ad_weight: u64,
) -> BTreeMap<String, WindowCounts> {
    let mut counts: BTreeMap<String, WindowCounts> = BTreeMap::new();

    // Undated posts fall in no window.
    for post in posts {
        let Some(at) = post.timestamp else { continue };
        for tag in distinct_tags(&post.hashtags) {
            windows.credit(counts.entry(tag).or_default(), at);
        }
    }

    for ad in ads.iter().filter(|ad| ad.is_active()) {
        for tag in distinct_tags(&ad.hashtags) {
            let entry = counts.entry(tag).or_default();
            entry.recent += ad_weight;
            entry.weekly += ad_weight;
        }
    }

    counts
}
