use lumen_core::config::SearchConfig;
use lumen_core::models::{MatchedField, ResultPayload, SearchResult, User};

use super::excerpt;
use crate::scoring::{popularity, FieldScore, Scored};
use crate::tokenize::QueryTokens;

pub const NAME_WEIGHT: f64 = 4.0;
pub const FULL_NAME_WEIGHT: f64 = 5.0;
pub const HANDLE_WEIGHT: f64 = 3.0;
pub const BIO_WEIGHT: f64 = 2.0;
pub const COMPANY_WEIGHT: f64 = 2.0;
pub const INDUSTRY_WEIGHT: f64 = 1.5;

/// Score one user. Users who opted out of search are never scored.
pub fn score_user(tokens: &QueryTokens, user: &User, config: &SearchConfig) -> Option<Scored> {
    if !user.is_searchable() {
        return None;
    }

    let mut score = FieldScore::new();
    score.weighted(tokens, MatchedField::Name, &user.name, NAME_WEIGHT);
    score.weighted(tokens, MatchedField::FirstName, &user.first_name, NAME_WEIGHT);
    score.weighted(tokens, MatchedField::LastName, &user.last_name, NAME_WEIGHT);

    let (first, last) = (user.first_name.trim(), user.last_name.trim());
    if !first.is_empty() && !last.is_empty() {
        let combinations = [
            format!("{first} {last}"),
            format!("{last} {first}"),
            format!("{first}{last}"),
        ];
        score.best_of(tokens, MatchedField::FullName, &combinations, FULL_NAME_WEIGHT);
    }

    score.weighted(tokens, MatchedField::Handle, &user.handle, HANDLE_WEIGHT);
    score.weighted(tokens, MatchedField::Bio, &user.bio, BIO_WEIGHT);
    score.weighted(tokens, MatchedField::CompanyName, &user.company_name, COMPANY_WEIGHT);
    score.weighted(tokens, MatchedField::Industry, &user.industry, INDUSTRY_WEIGHT);

    let boost = if config.popularity_boost {
        popularity::user_boost(user.trust_score)
    } else {
        0.0
    };
    score.finish(boost)
}

pub fn search(tokens: &QueryTokens, users: &[User], config: &SearchConfig) -> Vec<SearchResult> {
    users
        .iter()
        .filter_map(|user| {
            let scored = score_user(tokens, user, config)?;
            let description = if user.bio.trim().is_empty() {
                format!("@{}", user.handle.trim_start_matches('@'))
            } else {
                excerpt(&user.bio)
            };
            Some(SearchResult {
                id: user.id.clone(),
                title: user.display_name(),
                description,
                relevance: scored.relevance,
                matched_fields: scored.matched_fields,
                payload: ResultPayload::User(user.clone()),
            })
        })
        .collect()
}
