use std::collections::HashMap;

use lumen_core::config::SearchConfig;
use lumen_core::models::{
    normalize_hashtag, Ad, HashtagSummary, MatchedField, Post, ResultPayload, SearchResult,
};

use crate::scoring::{popularity, FieldScore};
use crate::tokenize::QueryTokens;

/// Count every hashtag occurrence over posts and active ads, once each,
/// in first-seen order.
pub fn tally<'a>(posts: &[Post], ads: impl IntoIterator<Item = &'a Ad>) -> Vec<HashtagSummary> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut summaries: Vec<HashtagSummary> = Vec::new();

    let post_tags = posts.iter().flat_map(|p| p.hashtags.iter());
    let ad_tags = ads
        .into_iter()
        .filter(|ad| ad.is_active())
        .flat_map(|ad| ad.hashtags.iter());

    for raw in post_tags.chain(ad_tags) {
        let tag = normalize_hashtag(raw);
        if tag.is_empty() {
            continue;
        }
        match index.get(&tag) {
            Some(&i) => summaries[i].count += 1,
            None => {
                index.insert(tag.clone(), summaries.len());
                summaries.push(HashtagSummary { tag, count: 1 });
            }
        }
    }

    summaries
}

pub fn search(
    tokens: &QueryTokens,
    posts: &[Post],
    ads: &[Ad],
    config: &SearchConfig,
) -> Vec<SearchResult> {
    let bare = tokens.without_hash();
    if bare.is_empty() {
        return Vec::new();
    }

    tally(posts, ads)
        .into_iter()
        .filter_map(|summary| {
            let mut score = FieldScore::new();
            score.weighted(&bare, MatchedField::Hashtag, &summary.tag, 1.0);
            let boost = if config.popularity_boost {
                popularity::hashtag_boost(summary.count)
            } else {
                0.0
            };
            let scored = score.finish(boost)?;
            Some(SearchResult {
                id: summary.tag.clone(),
                title: format!("#{}", summary.tag),
                description: format!(
                    "{} {}",
                    summary.count,
                    if summary.count == 1 { "use" } else { "uses" }
                ),
                relevance: scored.relevance,
                matched_fields: scored.matched_fields,
                payload: ResultPayload::Hashtag(summary),
            })
        })
        .collect()
}
