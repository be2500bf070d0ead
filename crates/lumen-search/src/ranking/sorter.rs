//! Stable ordering. Ties keep their incoming order.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use lumen_core::models::{SearchResult, SortBy};

pub fn sort(results: &mut [SearchResult], sort_by: SortBy, now: DateTime<Utc>) {
    match sort_by {
        SortBy::Relevance => results.sort_by(|a, b| b.relevance.total_cmp(&a.relevance)),
        // Kinds without a timestamp sort as if created now.
        SortBy::Date => results.sort_by_key(|r| Reverse(r.payload.timestamp().unwrap_or(now))),
        SortBy::Popularity => results.sort_by(|a, b| {
            b.payload
                .popularity()
                .total_cmp(&a.payload.popularity())
        }),
    }
}
