//! Drop timestamped results older than the selected range.
//!
//! Only posts carry a timestamp. Every other kind passes through
//! regardless of the range; no timestamp is ever synthesized for them.

use chrono::{DateTime, Utc};

use lumen_core::models::{DateRange, SearchResult};

pub fn apply(results: &mut Vec<SearchResult>, range: DateRange, now: DateTime<Utc>) {
    let Some(span) = range.span() else {
        return;
    };
    let cutoff = now - span;
    results.retain(|r| r.payload.timestamp().map_or(true, |ts| ts >= cutoff));
}
