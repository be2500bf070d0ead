//! Per-entity searchers. Each turns tokens plus a collection into scored
//! results, in collection order.

pub mod ad;
pub mod hashtag;
pub mod post;
pub mod user;

/// Longest description carried on a result before truncation.
const EXCERPT_CHARS: usize = 160;

/// Char-safe truncation with an ellipsis.
pub(crate) fn excerpt(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", trimmed[..cut].trim_end()),
        None => trimmed.to_string(),
    }
}
