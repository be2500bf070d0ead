//! Client-side trend aggregation over posts and active ads.

pub mod classify;
pub mod windows;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use tracing::debug;

use lumen_core::config::TrendingConfig;
use lumen_core::constants::MIN_TRENDING_HASHTAG_LEN;
use lumen_core::models::{Ad, Post, TrendingTopic};

pub use windows::{WindowCounts, Windows};

/// Rank every hashtag seen in `posts` and active `ads` relative to `now`.
///
/// Topics with no recent activity, or whose normalized name is shorter than
/// two characters, are dropped. Ordering is by rank score, then name.
pub fn compute_trending(
    posts: &[Post],
    ads: &[Ad],
    now: DateTime<Utc>,
    config: &TrendingConfig,
) -> Vec<TrendingTopic> {
    let windows = Windows::anchored(now, config);
    let counts = windows::tally(posts, ads, &windows, config.ad_weight);
    let distinct = counts.len();

    let mut ranked: Vec<(f64, TrendingTopic)> = counts
        .into_iter()
        .filter(|(tag, c)| c.recent >= 1 && tag.chars().count() >= MIN_TRENDING_HASHTAG_LEN)
        .map(|(hashtag, c)| {
            let growth = classify::growth(&c);
            let category = classify::category(growth, &c);
            let score = classify::rank_score(c.recent, growth, category);
            (
                score,
                TrendingTopic {
                    hashtag,
                    count: c.recent,
                    growth,
                    category,
                },
            )
        })
        .collect();

    ranked.sort_by(|(sa, a), (sb, b)| match sb.total_cmp(sa) {
        Ordering::Equal => a.hashtag.cmp(&b.hashtag),
        other => other,
    });
    ranked.truncate(config.max_topics);

    debug!(distinct, kept = ranked.len(), "trending aggregation");
    ranked.into_iter().map(|(_, topic)| topic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use lumen_core::models::{AdStatus, AuthorRef, TrendCategory};

    fn tagged(tags: &[&str], at: DateTime<Utc>) -> Post {
        Post {
            id: format!("{tags:?}{at}"),
            content: String::new(),
            author: AuthorRef::default(),
            hashtags: tags.iter().map(|t| t.to_string()).collect(),
            comments: vec![],
            timestamp: Some(at),
            radiance: 0.0,
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + Duration::days(1000)
    }

    #[test]
    fn ties_break_by_name() {
        let posts = vec![tagged(&["beta", "alpha"], now() - Duration::hours(1))];
        let topics = compute_trending(&posts, &[], now(), &TrendingConfig::default());
        let names: Vec<&str> = topics.iter().map(|t| t.hashtag.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn single_character_and_stale_tags_are_dropped() {
        let posts = vec![
            tagged(&["x", "ok"], now() - Duration::hours(2)),
            tagged(&["old"], now() - Duration::hours(30)),
        ];
        let topics = compute_trending(&posts, &[], now(), &TrendingConfig::default());
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].hashtag, "ok");
    }

    #[test]
    fn active_ads_weigh_three() {
        let ad = Ad {
            id: "a".into(),
            headline: String::new(),
            description: String::new(),
            owner_name: String::new(),
            hashtags: vec!["#Promo".into()],
            cta_text: String::new(),
            status: AdStatus::Active,
        };
        let paused = Ad {
            status: AdStatus::Paused,
            hashtags: vec!["paused".into()],
            ..ad.clone()
        };
        let topics = compute_trending(&[], &[ad, paused], now(), &TrendingConfig::default());
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].hashtag, "promo");
        assert_eq!(topics[0].count, 3);
        assert_eq!(topics[0].growth, 100.0);
        assert_eq!(topics[0].category, TrendCategory::Steady);
    }

    #[test]
    fn output_is_truncated() {
        let tags: Vec<String> = (0..30).map(|i| format!("tag{i:02}")).collect();
        let refs: Vec<&str> = tags.iter().map(String::as_str).collect();
        let posts = vec![tagged(&refs, now())];
        let topics = compute_trending(&posts, &[], now(), &TrendingConfig::default());
        assert_eq!(topics.len(), 15);
        assert_eq!(topics[0].hashtag, "tag00");
    }
}
