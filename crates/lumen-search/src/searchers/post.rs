use lumen_core::config::SearchConfig;
use lumen_core::models::{normalize_hashtag, MatchedField, Post, ResultPayload, SearchResult};

use super::excerpt;
use crate::scoring::{popularity, FieldScore, Scored};
use crate::tokenize::QueryTokens;

pub const CONTENT_WEIGHT: f64 = 3.0;
pub const AUTHOR_NAME_WEIGHT: f64 = 2.0;
pub const AUTHOR_HANDLE_WEIGHT: f64 = 2.0;
pub const HASHTAG_BONUS: f64 = 2.0;
pub const COMMENT_BONUS: f64 = 1.0;

/// Score one post, or `None` when nothing textual matched.
pub fn score_post(tokens: &QueryTokens, post: &Post, config: &SearchConfig) -> Option<Scored> {
    let mut score = FieldScore::new();
    score.weighted(tokens, MatchedField::Content, &post.content, CONTENT_WEIGHT);
    score.weighted(tokens, MatchedField::AuthorName, &post.author.name, AUTHOR_NAME_WEIGHT);
    score.weighted(
        tokens,
        MatchedField::AuthorHandle,
        &post.author.handle,
        AUTHOR_HANDLE_WEIGHT,
    );

    let tags: Vec<String> = post.hashtags.iter().map(|t| normalize_hashtag(t)).collect();
    let tag_hit = tokens
        .iter()
        .any(|t| !t.bare().is_empty() && tags.iter().any(|tag| tag == t.bare()));
    score.flat(MatchedField::Hashtags, tag_hit, HASHTAG_BONUS);

    let comment_hit = post
        .comments
        .iter()
        .any(|c| tokens.any_contained_in(&c.text.to_lowercase()));
    score.flat(MatchedField::Comments, comment_hit, COMMENT_BONUS);

    let boost = if config.popularity_boost {
        popularity::post_boost(post.radiance)
    } else {
        0.0
    };
    score.finish(boost)
}

pub fn search(tokens: &QueryTokens, posts: &[Post], config: &SearchConfig) -> Vec<SearchResult> {
    posts
        .iter()
        .filter_map(|post| {
            let scored = score_post(tokens, post, config)?;
            Some(SearchResult {
                id: post.id.clone(),
                title: author_label(post),
                description: excerpt(&post.content),
                relevance: scored.relevance,
                matched_fields: scored.matched_fields,
                payload: ResultPayload::Post(post.clone()),
            })
        })
        .collect()
}

fn author_label(post: &Post) -> String {
    if !post.author.name.trim().is_empty() {
        post.author.name.clone()
    } else if !post.author.handle.is_empty() {
        format!("@{}", post.author.handle.trim_start_matches('@'))
    } else {
        "Post".to_string()
    }
}
