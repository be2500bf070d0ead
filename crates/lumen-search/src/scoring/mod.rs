//! Field-level relevance accumulation.

pub mod popularity;
pub mod relevance;

use std::collections::BTreeSet;

use lumen_core::models::MatchedField;

use crate::tokenize::QueryTokens;

/// Final relevance and contributing fields for one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub relevance: f64,
    pub matched_fields: BTreeSet<MatchedField>,
}

/// Accumulates weighted field contributions for one entity.
#[derive(Debug, Default)]
pub struct FieldScore {
    base: f64,
    matched: BTreeSet<MatchedField>,
}

impl FieldScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `score(text) × weight`, recording `field` when it matched.
    pub fn weighted(&mut self, tokens: &QueryTokens, field: MatchedField, text: &str, weight: f64) {
        let raw = relevance::score_field(tokens, text);
        if raw > 0.0 {
            self.base += raw * weight;
            self.matched.insert(field);
        }
    }

    /// Score every candidate, count only the best one.
    pub fn best_of(
        &mut self,
        tokens: &QueryTokens,
        field: MatchedField,
        candidates: &[String],
        weight: f64,
    ) {
        let best = candidates
            .iter()
            .map(|c| relevance::score_field(tokens, c))
            .fold(0.0, f64::max);
        if best > 0.0 {
            self.base += best * weight;
            self.matched.insert(field);
        }
    }

    /// Add a flat bonus when `hit` is true.
    pub fn flat(&mut self, field: MatchedField, hit: bool, bonus: f64) {
        if hit {
            self.base += bonus;
            self.matched.insert(field);
        }
    }

    /// Textual relevance before any popularity term.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Close out the entity. Popularity only counts on top of a textual
    /// match, so an entity with zero base relevance yields `None`.
    pub fn finish(self, popularity_boost: f64) -> Option<Scored> {
        if self.base <= 0.0 || self.matched.is_empty() {
            return None;
        }
        let relevance = self.base + popularity_boost.max(0.0);
        Some(Scored {
            relevance,
            matched_fields: self.matched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popularity_alone_never_produces_a_score() {
        let score = FieldScore::new();
        assert!(score.finish(42.0).is_none());
    }

    #[test]
    fn weighted_match_records_field() {
        let tokens = QueryTokens::parse("rust");
        let mut score = FieldScore::new();
        score.weighted(&tokens, MatchedField::Content, "Rust", 3.0);
        score.weighted(&tokens, MatchedField::Bio, "gardening", 2.0);
        let scored = score.finish(0.5).unwrap();
        assert_eq!(scored.relevance, 30.5);
        assert_eq!(scored.matched_fields, BTreeSet::from([MatchedField::Content]));
    }

    #[test]
    fn best_of_counts_a_single_candidate() {
        let tokens = QueryTokens::parse("jordan");
        let mut score = FieldScore::new();
        let candidates = vec!["jordan lee".to_string(), "lee jordan".to_string()];
        score.best_of(&tokens, MatchedField::FullName, &candidates, 5.0);
        // "jordan lee" starts with the token but whole-word wins: 5 × 5.
        assert_eq!(score.base(), 25.0);
    }

    #[test]
    fn flat_bonus_only_on_hit() {
        let mut score = FieldScore::new();
        score.flat(MatchedField::Hashtags, false, 2.0);
        assert_eq!(score.base(), 0.0);
        score.flat(MatchedField::Hashtags, true, 2.0);
        assert_eq!(score.base(), 2.0);
    }
}
