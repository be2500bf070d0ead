//! Endpoint paths and query parameters of the remote API.

pub const POSTS_SEARCH: &str = "/posts/search";
pub const USERS_SEARCH: &str = "/users/search";
pub const TRENDING: &str = "/trending";

/// Query parameters as `(name, value)` pairs; encoding is the client's job.
pub type QueryParams = Vec<(&'static str, String)>;

pub fn search_query(query: &str) -> QueryParams {
    vec![("q", query.to_string())]
}

pub fn trending_query(limit: usize, hours: u32) -> QueryParams {
    vec![("limit", limit.to_string()), ("hours", hours.to_string())]
}
