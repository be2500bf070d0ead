//! Query tokenization: whitespace split, lowercase, drop empties.

use regex::Regex;

/// One lowercase query term with its precompiled whole-word matcher.
#[derive(Debug, Clone)]
pub struct QueryToken {
    text: String,
    whole_word: Option<Regex>,
}

impl QueryToken {
    fn new(text: String) -> Self {
        let whole_word = Regex::new(&format!(r"\b{}\b", regex::escape(&text))).ok();
        Self { text, whole_word }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The token without any leading `#`.
    pub fn bare(&self) -> &str {
        self.text.trim_start_matches('#')
    }

    /// Whether the token occurs in `haystack` bounded by word boundaries.
    pub fn is_whole_word_in(&self, haystack: &str) -> bool {
        self.whole_word
            .as_ref()
            .is_some_and(|re| re.is_match(haystack))
    }
}

/// The tokenized form of a query.
#[derive(Debug, Clone, Default)]
pub struct QueryTokens {
    tokens: Vec<QueryToken>,
}

impl QueryTokens {
    pub fn parse(query: &str) -> Self {
        Self {
            tokens: query
                .split_whitespace()
                .map(|t| QueryToken::new(t.to_lowercase()))
                .collect(),
        }
    }

    /// Tokens with leading `#` stripped; tokens that were only `#` are dropped.
    pub fn without_hash(&self) -> Self {
        Self {
            tokens: self
                .tokens
                .iter()
                .map(QueryToken::bare)
                .filter(|t| !t.is_empty())
                .map(|t| QueryToken::new(t.to_string()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryToken> {
        self.tokens.iter()
    }

    /// Whether any token is a substring of the (lowercase) haystack.
    pub fn any_contained_in(&self, haystack: &str) -> bool {
        self.tokens.iter().any(|t| haystack.contains(t.as_str()))
    }
}

impl<'a> IntoIterator for &'a QueryTokens {
    type Item = &'a QueryToken;
    type IntoIter = std::slice::Iter<'a, QueryToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
