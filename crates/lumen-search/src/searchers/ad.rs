use lumen_core::models::{normalize_hashtag, Ad, MatchedField, ResultPayload, SearchResult};

use super::excerpt;
use crate::scoring::{FieldScore, Scored};
use crate::tokenize::QueryTokens;

pub const HEADLINE_WEIGHT: f64 = 4.0;
pub const DESCRIPTION_WEIGHT: f64 = 3.0;
pub const OWNER_WEIGHT: f64 = 2.0;
pub const HASHTAG_BONUS: f64 = 2.0;
pub const CTA_BONUS: f64 = 1.0;

/// Score one ad. Only active ads are searchable; ads carry no popularity term.
pub fn score_ad(tokens: &QueryTokens, ad: &Ad) -> Option<Scored> {
    if !ad.is_active() {
        return None;
    }

    let mut score = FieldScore::new();
    score.weighted(tokens, MatchedField::Headline, &ad.headline, HEADLINE_WEIGHT);
    score.weighted(tokens, MatchedField::Description, &ad.description, DESCRIPTION_WEIGHT);
    score.weighted(tokens, MatchedField::OwnerName, &ad.owner_name, OWNER_WEIGHT);

    let tag_hit = ad.hashtags.iter().map(|t| normalize_hashtag(t)).any(|tag| {
        tokens
            .iter()
            .any(|t| !t.bare().is_empty() && t.bare() == tag)
    });
    score.flat(MatchedField::Hashtags, tag_hit, HASHTAG_BONUS);

    let cta_hit = !ad.cta_text.is_empty() && tokens.any_contained_in(&ad.cta_text.to_lowercase());
    score.flat(MatchedField::CtaText, cta_hit, CTA_BONUS);

    score.finish(0.0)
}

pub fn search(tokens: &QueryTokens, ads: &[Ad]) -> Vec<SearchResult> {
    ads.iter()
        .filter_map(|ad| {
            let scored = score_ad(tokens, ad)?;
            Some(SearchResult {
                id: ad.id.clone(),
                title: ad.headline.clone(),
                description: excerpt(&ad.description),
                relevance: scored.relevance,
                matched_fields: scored.matched_fields,
                payload: ResultPayload::Ad(ad.clone()),
            })
        })
        .collect()
}
