//! Token presence scoring for a single text field.
//!
//! Per token exactly one tier fires, highest first:
//! exact = 10, whole word = 5, prefix = 3, substring = 1.

use crate::tokenize::{QueryToken, QueryTokens};

/// How a token matched a haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Substring,
    Prefix,
    WholeWord,
    Exact,
}

impl MatchTier {
    pub const fn points(self) -> f64 {
        match self {
            MatchTier::Exact => 10.0,
            MatchTier::WholeWord => 5.0,
            MatchTier::Prefix => 3.0,
            MatchTier::Substring => 1.0,
        }
    }
}

/// The highest tier `token` reaches in the lowercase `haystack`.
pub fn match_tier(token: &QueryToken, haystack: &str) -> Option<MatchTier> {
    let needle = token.as_str();
    if haystack == needle {
        Some(MatchTier::Exact)
    } else if token.is_whole_word_in(haystack) {
        Some(MatchTier::WholeWord)
    } else if haystack.starts_with(needle) {
        Some(MatchTier::Prefix)
    } else if haystack.contains(needle) {
        Some(MatchTier::Substring)
    } else {
        None
    }
}

/// Sum of tier points over all tokens against a lowercase haystack.
pub fn score_text(tokens: &QueryTokens, haystack: &str) -> f64 {
    tokens
        .iter()
        .filter_map(|t| match_tier(t, haystack))
        .map(MatchTier::points)
        .sum()
}

/// [`score_text`] on arbitrary-case field text.
pub fn score_field(tokens: &QueryTokens, text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    score_text(tokens, &text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(token: &str, haystack: &str) -> Option<MatchTier> {
        let tokens = QueryTokens::parse(token);
        match_tier(tokens.iter().next().unwrap(), haystack)
    }

    #[test]
    fn tiers_are_exclusive_and_ordered() {
        assert_eq!(tier("rust", "rust"), Some(MatchTier::Exact));
        assert_eq!(tier("rust", "learning rust today"), Some(MatchTier::WholeWord));
        // Prefix and whole word both hold; whole word wins.
        assert_eq!(tier("rust", "rust is fun"), Some(MatchTier::WholeWord));
        assert_eq!(tier("rust", "rustacean"), Some(MatchTier::Prefix));
        assert_eq!(tier("rust", "trusty"), Some(MatchTier::Substring));
        assert_eq!(tier("rust", "golang"), None);
    }

    #[test]
    fn tiers_do_not_sum_per_token() {
        let tokens = QueryTokens::parse("rust");
        assert_eq!(score_text(&tokens, "rust"), 10.0);
    }

    #[test]
    fn sums_across_tokens() {
        let tokens = QueryTokens::parse("leadership tips");
        // whole word (5) + whole word (5)
        assert_eq!(score_text(&tokens, "great leadership tips"), 10.0);
    }

    #[test]
    fn field_text_is_lowercased() {
        let tokens = QueryTokens::parse("leadership");
        assert_eq!(score_field(&tokens, "Great LEADERSHIP tips"), 5.0);
        assert_eq!(score_field(&tokens, ""), 0.0);
    }
}
