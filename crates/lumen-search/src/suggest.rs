//! Autocomplete suggestions for a partial query.
//!
//! Order: user names and handles, then hashtags containing the text, then
//! content words longer than three characters containing it. Matching is
//! case-insensitive and the output is de-duplicated in first-seen order.

use std::collections::HashSet;

use lumen_core::constants::{MAX_SUGGESTIONS, MIN_SUGGESTION_WORD_LEN};
use lumen_core::models::{normalize_hashtag, Corpus};

struct Suggestions {
    limit: usize,
    seen: HashSet<String>,
    out: Vec<String>,
}

impl Suggestions {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: HashSet::new(),
            out: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.out.len() >= self.limit
    }

    fn push(&mut self, suggestion: String) {
        if !self.is_full() && self.seen.insert(suggestion.to_lowercase()) {
            self.out.push(suggestion);
        }
    }
}

/// Up to eight suggestions for `partial`.
pub fn suggestions(partial: &str, corpus: Corpus<'_>) -> Vec<String> {
    suggestions_with_limit(partial, corpus, MAX_SUGGESTIONS)
}

pub fn suggestions_with_limit(partial: &str, corpus: Corpus<'_>, limit: usize) -> Vec<String> {
    let needle = partial.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut acc = Suggestions::new(limit);

    for user in corpus.users.iter().filter(|u| u.is_searchable()) {
        let name = user.display_name();
        if !name.is_empty() && name.to_lowercase().contains(&needle) {
            acc.push(name);
        }
        let handle = user.handle.trim_start_matches('@');
        if !handle.is_empty() && handle.to_lowercase().contains(&needle) {
            acc.push(format!("@{handle}"));
        }
        if acc.is_full() {
            return acc.out;
        }
    }

    // A bare "#" names no tag.
    let tag_needle = needle.trim_start_matches('#');
    if tag_needle.is_empty() {
        return acc.out;
    }

    let post_tags = corpus.posts.iter().flat_map(|p| p.hashtags.iter());
    let ad_tags = corpus.active_ads().flat_map(|a| a.hashtags.iter());
    for raw in post_tags.chain(ad_tags) {
        let tag = normalize_hashtag(raw);
        if !tag.is_empty() && tag.contains(tag_needle) {
            acc.push(format!("#{tag}"));
        }
        if acc.is_full() {
            return acc.out;
        }
    }

    for post in corpus.posts {
        for word in post.content.split_whitespace() {
            let word = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.chars().count() > MIN_SUGGESTION_WORD_LEN && word.contains(&needle) {
                acc.push(word);
            }
        }
        if acc.is_full() {
            break;
        }
    }

    acc.out
}
