//! Property tests for lumen-trending: ordering, bounds, and category rules.

use chrono::Duration;
use proptest::prelude::*;

use lumen_core::config::TrendingConfig;
use lumen_core::models::{Post, TrendCategory};
use lumen_trending::aggregate::{classify, compute_trending};
use test_fixtures::{fixture_now, post};

const TAGS: &[&str] = &["rust", "go", "zig", "design", "growth", "x", "#Rust", "Design"];

fn posts_strategy() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec(
        (prop::collection::vec(prop::sample::select(TAGS), 0..4), -12i64..24 * 9),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(tags, hours_ago)| {
                post("")
                    .hashtags(&tags)
                    .at(fixture_now() - Duration::hours(hours_ago))
                    .build()
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn topics_are_bounded_and_normalized(posts in posts_strategy()) {
        let config = TrendingConfig::default();
        let topics = compute_trending(&posts, &[], fixture_now(), &config);
        prop_assert!(topics.len() <= config.max_topics);
        for topic in &topics {
            prop_assert!(topic.count >= 1);
            prop_assert!(topic.hashtag.chars().count() >= 2);
            prop_assert!(!topic.hashtag.starts_with('#'));
            prop_assert_eq!(topic.hashtag.to_lowercase(), topic.hashtag.clone());
        }
    }
}

proptest! {
    #[test]
    fn topics_are_unique_and_ranked(posts in posts_strategy()) {
        let topics = compute_trending(&posts, &[], fixture_now(), &TrendingConfig::default());
        let score = |i: usize| {
            let t = &topics[i];
            classify::rank_score(t.count, t.growth, t.category)
        };
        for i in 1..topics.len() {
            prop_assert!(score(i - 1) >= score(i));
            prop_assert_ne!(&topics[i - 1].hashtag, &topics[i].hashtag);
        }
    }
}

proptest! {
    #[test]
    fn rising_implies_growth_and_volume(posts in posts_strategy()) {
        for topic in compute_trending(&posts, &[], fixture_now(), &TrendingConfig::default()) {
            if topic.category == TrendCategory::Rising {
                prop_assert!(topic.growth > 150.0);
                prop_assert!(topic.count >= 3);
            }
        }
    }
}

proptest! {
    #[test]
    fn aggregation_is_deterministic(posts in posts_strategy()) {
        let a = compute_trending(&posts, &[], fixture_now(), &TrendingConfig::default());
        let b = compute_trending(&posts, &[], fixture_now(), &TrendingConfig::default());
        prop_assert_eq!(a, b);
    }
}
