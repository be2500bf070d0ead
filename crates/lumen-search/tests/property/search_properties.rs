//! Property tests for lumen-search: positive relevance, non-empty matched
//! fields, tier exclusivity, and deterministic ordering.

use chrono::Duration;
use proptest::prelude::*;

use lumen_core::config::SearchConfig;
use lumen_core::models::{Corpus, Post, SearchFilters, SearchResult, SortBy, User};
use lumen_search::scoring::relevance::score_text;
use lumen_search::{searchers, ranking, QueryTokens, SearchEngine};
use test_fixtures::{fixture_now, post, user};

const WORDS: &[&str] = &[
    "rust", "design", "growth", "team", "launch", "coffee", "garden", "trust", "rusty", "go",
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..6).prop_map(|w| w.join(" "))
}

fn posts_strategy() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec((text_strategy(), 0.0f64..100.0, 0i64..400), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (content, radiance, age_days))| {
                post(&content)
                    .id(&format!("p{i}"))
                    .radiance(radiance)
                    .at(fixture_now() - Duration::days(age_days))
                    .build()
            })
            .collect()
    })
}

fn users_strategy() -> impl Strategy<Value = Vec<User>> {
    prop::collection::vec((text_strategy(), text_strategy(), 0.0f64..100.0), 0..8).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, bio, trust))| {
                    user(&name).id(&format!("u{i}")).bio(&bio).trust(trust).build()
                })
                .collect()
        },
    )
}

fn run_search(query: &str, posts: &[Post], users: &[User], filters: &SearchFilters) -> Vec<SearchResult> {
    let config = SearchConfig::default();
    let tokens = QueryTokens::parse(query);
    if tokens.is_empty() {
        return Vec::new();
    }
    let mut results = searchers::post::search(&tokens, posts, &config);
    results.extend(searchers::user::search(&tokens, users, &config));
    ranking::apply(&mut results, filters, fixture_now());
    results
}

proptest! {
    #[test]
    fn every_result_has_positive_relevance_and_fields(
        query in text_strategy(),
        posts in posts_strategy(),
        users in users_strategy(),
    ) {
        for result in run_search(&query, &posts, &users, &SearchFilters::default()) {
            prop_assert!(result.relevance > 0.0, "{} scored {}", result.id, result.relevance);
            prop_assert!(!result.matched_fields.is_empty(), "{} has no matched fields", result.id);
        }
    }
}

proptest! {
    #[test]
    fn identical_inputs_give_identical_order(
        query in text_strategy(),
        posts in posts_strategy(),
        users in users_strategy(),
        sort in prop::sample::select(vec![SortBy::Relevance, SortBy::Date, SortBy::Popularity]),
    ) {
        let filters = SearchFilters { sort_by: sort, ..SearchFilters::default() };
        let first: Vec<String> = run_search(&query, &posts, &users, &filters)
            .into_iter().map(|r| r.id).collect();
        let second: Vec<String> = run_search(&query, &posts, &users, &filters)
            .into_iter().map(|r| r.id).collect();
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn relevance_order_is_non_increasing(
        query in text_strategy(),
        posts in posts_strategy(),
    ) {
        let results = run_search(&query, &posts, &[], &SearchFilters::default());
        for pair in results.windows(2) {
            prop_assert!(pair[0].relevance >= pair[1].relevance);
        }
    }
}

proptest! {
    #[test]
    fn one_tier_per_token(token in prop::sample::select(WORDS), haystack in text_strategy()) {
        let tokens = QueryTokens::parse(token);
        let score = score_text(&tokens, &haystack);
        prop_assert!([0.0, 1.0, 3.0, 5.0, 10.0].contains(&score), "score {}", score);
    }
}

#[test]
fn engine_and_searchers_agree() {
    let posts = vec![post("rust garden").id("a").build(), post("garden").id("b").build()];
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let from_engine: Vec<String> = runtime
        .block_on(
            SearchEngine::new(SearchConfig::default()).search(
                "garden",
                Corpus::new(&posts, &[], &[]),
                &SearchFilters::default(),
            ),
        )
        .into_iter()
        .map(|r| r.id)
        .collect();
    let direct: Vec<String> = run_search("garden", &posts, &[], &SearchFilters::default())
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(from_engine, direct);
}
