use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::errors::SearchError;

/// Caller-selected filters for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub date_range: DateRange,
    pub sort_by: SortBy,
}

impl SearchFilters {
    pub fn new(kind: SearchKind, date_range: DateRange, sort_by: SortBy) -> Self {
        Self {
            kind,
            date_range,
            sort_by,
        }
    }
}

/// Which entity searchers run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    #[default]
    All,
    Posts,
    Users,
    Ads,
    Hashtags,
}

impl SearchKind {
    pub fn includes_posts(self) -> bool {
        matches!(self, SearchKind::All | SearchKind::Posts)
    }

    pub fn includes_users(self) -> bool {
        matches!(self, SearchKind::All | SearchKind::Users)
    }

    pub fn includes_ads(self) -> bool {
        matches!(self, SearchKind::All | SearchKind::Ads)
    }

    pub fn includes_hashtags(self) -> bool {
        matches!(self, SearchKind::All | SearchKind::Hashtags)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchKind::All => "all",
            SearchKind::Posts => "posts",
            SearchKind::Users => "users",
            SearchKind::Ads => "ads",
            SearchKind::Hashtags => "hashtags",
        }
    }
}

/// Look-back window for timestamped results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
    Year,
}

impl DateRange {
    /// Width of the window, or `None` for `all`.
    pub fn span(self) -> Option<Duration> {
        match self {
            DateRange::All => None,
            DateRange::Today => Some(Duration::days(1)),
            DateRange::Week => Some(Duration::days(7)),
            DateRange::Month => Some(Duration::days(30)),
            DateRange::Year => Some(Duration::days(365)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::Year => "year",
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Relevance,
    Date,
    Popularity,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::Date => "date",
            SortBy::Popularity => "popularity",
        }
    }
}

macro_rules! impl_filter_str {
    ($ty:ty, $filter:literal, [$($name:literal => $variant:expr),+ $(,)?]) => {
        impl FromStr for $ty {
            type Err = SearchError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($variant),)+
                    _ => Err(SearchError::InvalidFilter {
                        filter: $filter,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_filter_str!(SearchKind, "type", [
    "all" => SearchKind::All,
    "posts" => SearchKind::Posts,
    "users" => SearchKind::Users,
    "ads" => SearchKind::Ads,
    "hashtags" => SearchKind::Hashtags,
]);

impl_filter_str!(DateRange, "dateRange", [
    "all" => DateRange::All,
    "today" => DateRange::Today,
    "week" => DateRange::Week,
    "month" => DateRange::Month,
    "year" => DateRange::Year,
]);

impl_filter_str!(SortBy, "sortBy", [
    "relevance" => SortBy::Relevance,
    "date" => SortBy::Date,
    "popularity" => SortBy::Popularity,
]);
