use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A feed post. Immutable for the duration of a search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: AuthorRef,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Creation time. `None` when the source sent none or an unreadable one.
    #[serde(
        alias = "createdAt",
        default,
        deserialize_with = "super::lenient::optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    /// Engagement score; drives the popularity boost and popularity sort.
    #[serde(default)]
    pub radiance: f64,
}

/// Denormalized author fields carried on a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorRef {
    pub name: String,
    pub handle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub text: String,
}
