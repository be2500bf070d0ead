//! SearchEngine: the public search entry point.
//!
//! Pipeline: tokenize → (remote augmentation for posts/users) → per-kind
//! searchers → concatenate → date filter → stable sort.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, info, Instrument};

use lumen_core::config::SearchConfig;
use lumen_core::errors::{CloudError, LumenResult};
use lumen_core::models::{Corpus, HasId, Post, SearchFilters, SearchResult, User};
use lumen_core::traits::{IClock, IRemoteDirectory, OfflineRemote, SystemClock};
use lumen_observability::degradation::components;
use lumen_observability::{search_span, DegradationTracker};

use crate::merge::merge_by_id;
use crate::ranking;
use crate::searchers;
use crate::suggest;
use crate::tokenize::QueryTokens;

/// Ranks heterogeneous results for a free-text query.
///
/// Holds no mutable state of its own, so one engine can serve any number
/// of concurrent or repeated calls.
pub struct SearchEngine<R = OfflineRemote> {
    remote: Option<R>,
    clock: Arc<dyn IClock>,
    config: SearchConfig,
    degradation: Option<Arc<DegradationTracker>>,
}

impl SearchEngine<OfflineRemote> {
    /// An engine that searches the supplied corpus only.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            remote: None,
            clock: Arc::new(SystemClock),
            config,
            degradation: None,
        }
    }
}

impl<R: IRemoteDirectory> SearchEngine<R> {
    /// An engine that augments posts and users from `remote` before scoring.
    pub fn with_remote(config: SearchConfig, remote: R) -> Self {
        Self {
            remote: Some(remote),
            clock: Arc::new(SystemClock),
            config,
            degradation: None,
        }
    }

    /// Replace the clock used for date filtering and date sorting.
    pub fn with_clock(mut self, clock: Arc<dyn IClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Record remote fallbacks into a shared tracker.
    pub fn with_degradation_tracker(mut self, tracker: Arc<DegradationTracker>) -> Self {
        self.degradation = Some(tracker);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run a search. A blank query returns nothing without touching the
    /// network. Remote failures degrade to local-only results.
    pub async fn search(
        &self,
        query: &str,
        corpus: Corpus<'_>,
        filters: &SearchFilters,
    ) -> Vec<SearchResult> {
        let tokens = QueryTokens::parse(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let span = search_span!(query, filters.kind);
        async {
            let kind = filters.kind;
            let mut results = Vec::new();

            if kind.includes_posts() {
                let posts = self.augmented_posts(query, corpus.posts).await;
                let hits = searchers::post::search(&tokens, &posts, &self.config);
                debug!(candidates = posts.len(), hits = hits.len(), "post search");
                results.extend(hits);
            }

            if kind.includes_users() {
                let users = self.augmented_users(query, corpus.users).await;
                let hits = searchers::user::search(&tokens, &users, &self.config);
                debug!(candidates = users.len(), hits = hits.len(), "user search");
                results.extend(hits);
            }

            if kind.includes_ads() {
                let hits = searchers::ad::search(&tokens, corpus.ads);
                debug!(candidates = corpus.ads.len(), hits = hits.len(), "ad search");
                results.extend(hits);
            }

            if kind.includes_hashtags() {
                let hits =
                    searchers::hashtag::search(&tokens, corpus.posts, corpus.ads, &self.config);
                debug!(hits = hits.len(), "hashtag search");
                results.extend(hits);
            }

            ranking::apply(&mut results, filters, self.clock.now());

            info!(
                results = results.len(),
                date_range = %filters.date_range,
                sort_by = %filters.sort_by,
                "search complete"
            );
            results
        }
        .instrument(span)
        .await
    }

    /// Autocomplete suggestions for a partially typed query.
    pub fn suggestions(&self, partial: &str, corpus: Corpus<'_>) -> Vec<String> {
        suggest::suggestions_with_limit(partial, corpus, self.config.suggestion_limit)
    }

    fn augmenting_remote(&self) -> Option<&R> {
        if self.config.remote_augmentation {
            self.remote.as_ref()
        } else {
            None
        }
    }

    async fn augmented_posts<'c>(&self, query: &str, local: &'c [Post]) -> Cow<'c, [Post]> {
        let Some(remote) = self.augmenting_remote() else {
            return Cow::Borrowed(local);
        };
        let fetched = remote
            .search_posts(query)
            .await
            .map(|r| (r.success, r.posts));
        self.merge_fetched(components::POST_AUGMENTATION, "posts/search", local, fetched)
    }

    async fn augmented_users<'c>(&self, query: &str, local: &'c [User]) -> Cow<'c, [User]> {
        let Some(remote) = self.augmenting_remote() else {
            return Cow::Borrowed(local);
        };
        let fetched = remote
            .search_users(query)
            .await
            .map(|r| (r.success, r.users));
        self.merge_fetched(components::USER_AUGMENTATION, "users/search", local, fetched)
    }

    /// Merge a remote response into the local slice, or fall back to the
    /// local slice alone when the call failed.
    fn merge_fetched<'c, T: HasId + Clone>(
        &self,
        component: &str,
        endpoint: &str,
        local: &'c [T],
        fetched: LumenResult<(bool, Vec<T>)>,
    ) -> Cow<'c, [T]> {
        let failure = match fetched {
            Ok((true, remote)) => {
                if let Some(tracker) = &self.degradation {
                    tracker.mark_recovered(component, self.clock.now());
                }
                debug!(component, fetched = remote.len(), "remote augmentation");
                return merge_by_id(local, remote);
            }
            Ok((false, _)) => CloudError::Unsuccessful {
                endpoint: endpoint.to_string(),
            }
            .to_string(),
            Err(e) => e.to_string(),
        };

        match &self.degradation {
            Some(tracker) => {
                tracker.record_fallback(component, failure, "local corpus", self.clock.now())
            }
            None => tracing::warn!(component, %failure, "remote augmentation failed, using local corpus"),
        }
        Cow::Borrowed(local)
    }
}
