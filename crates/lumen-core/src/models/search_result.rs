use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Ad, Post, User};

/// One ranked hit. `relevance` is always strictly positive: searchers never
/// emit a result without a textual match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub relevance: f64,
    pub matched_fields: BTreeSet<MatchedField>,
    #[serde(flatten)]
    pub payload: ResultPayload,
}

impl SearchResult {
    pub fn kind(&self) -> ResultKind {
        self.payload.kind()
    }
}

/// Discriminant of a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Post,
    User,
    Ad,
    Hashtag,
}

/// The entity behind a result, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ResultPayload {
    Post(Post),
    User(User),
    Ad(Ad),
    Hashtag(HashtagSummary),
}

impl ResultPayload {
    pub fn kind(&self) -> ResultKind {
        match self {
            ResultPayload::Post(_) => ResultKind::Post,
            ResultPayload::User(_) => ResultKind::User,
            ResultPayload::Ad(_) => ResultKind::Ad,
            ResultPayload::Hashtag(_) => ResultKind::Hashtag,
        }
    }

    /// Creation time, for the kinds that carry one (posts only).
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            ResultPayload::Post(post) => post.timestamp,
            _ => None,
        }
    }

    /// Popularity signal used by `sortBy = popularity`; ads have none.
    pub fn popularity(&self) -> f64 {
        match self {
            ResultPayload::Post(post) => post.radiance,
            ResultPayload::User(user) => user.trust_score,
            ResultPayload::Hashtag(tag) => tag.count as f64,
            ResultPayload::Ad(_) => 0.0,
        }
    }
}

/// A hashtag aggregated over the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagSummary {
    pub tag: String,
    pub count: u64,
}

/// Entity fields that can contribute to relevance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchedField {
    // Posts
    Content,
    AuthorName,
    AuthorHandle,
    Comments,
    // Users
    Name,
    FirstName,
    LastName,
    FullName,
    Handle,
    Bio,
    CompanyName,
    Industry,
    // Ads
    Headline,
    Description,
    OwnerName,
    CtaText,
    // Posts, ads, hashtags
    Hashtags,
    Hashtag,
}

impl MatchedField {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchedField::Content => "content",
            MatchedField::AuthorName => "authorName",
            MatchedField::AuthorHandle => "authorHandle",
            MatchedField::Comments => "comments",
            MatchedField::Name => "name",
            MatchedField::FirstName => "firstName",
            MatchedField::LastName => "lastName",
            MatchedField::FullName => "fullName",
            MatchedField::Handle => "handle",
            MatchedField::Bio => "bio",
            MatchedField::CompanyName => "companyName",
            MatchedField::Industry => "industry",
            MatchedField::Headline => "headline",
            MatchedField::Description => "description",
            MatchedField::OwnerName => "ownerName",
            MatchedField::CtaText => "ctaText",
            MatchedField::Hashtags => "hashtags",
            MatchedField::Hashtag => "hashtag",
        }
    }
}

impl fmt::Display for MatchedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
