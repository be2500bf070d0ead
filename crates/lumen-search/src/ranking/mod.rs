//! Post-scoring stages: date filter, then stable sort.

pub mod date_filter;
pub mod sorter;

use chrono::{DateTime, Utc};

use lumen_core::models::{SearchFilters, SearchResult};

/// Apply the date filter and ordering selected in `filters`.
pub fn apply(results: &mut Vec<SearchResult>, filters: &SearchFilters, now: DateTime<Utc>) {
    date_filter::apply(results, filters.date_range, now);
    sorter::sort(results, filters.sort_by, now);
}
