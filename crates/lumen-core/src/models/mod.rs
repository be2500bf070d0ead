mod ad;
mod corpus;
mod degradation_event;
mod filters;
mod lenient;
mod post;
pub mod remote;
mod search_result;
mod trending;
mod user;

pub use ad::{Ad, AdStatus};
pub use corpus::{Corpus, HasId};
pub use degradation_event::DegradationEvent;
pub use filters::{DateRange, SearchFilters, SearchKind, SortBy};
pub use post::{AuthorRef, Comment, Post};
pub use remote::{RemotePosts, RemoteUsers, TrendCount, TrendingResponse};
pub use search_result::{HashtagSummary, MatchedField, ResultKind, ResultPayload, SearchResult};
pub use trending::{normalize_hashtag, TrendCacheEntry, TrendCategory, TrendingTopic};
pub use user::{PrivacySettings, User};
