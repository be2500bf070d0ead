//! Span definitions per operation: search, trending aggregation, trend fetch.

/// Create a search span.
#[macro_export]
macro_rules! search_span {
    ($query:expr, $kind:expr) => {
        tracing::info_span!("lumen.search", query = %$query, kind = %$kind)
    };
}

/// Create a client-side trending aggregation span.
#[macro_export]
macro_rules! trending_span {
    ($post_count:expr, $ad_count:expr) => {
        tracing::info_span!("lumen.trending", posts = $post_count, ads = $ad_count)
    };
}

/// Create a remote trend fetch span.
#[macro_export]
macro_rules! trend_fetch_span {
    ($limit:expr, $hours:expr) => {
        tracing::info_span!("lumen.trend_fetch", limit = $limit, hours = $hours)
    };
}
