//! Remote collaborators. Each method is a suspension point; engines treat
//! every error from them as recoverable.

use std::sync::Arc;

use crate::errors::{CloudError, LumenResult};
use crate::models::{RemotePosts, RemoteUsers, TrendingResponse};

/// Server-side post and user search, used to augment the local corpus.
#[allow(async_fn_in_trait)]
pub trait IRemoteDirectory {
    async fn search_posts(&self, query: &str) -> LumenResult<RemotePosts>;
    async fn search_users(&self, query: &str) -> LumenResult<RemoteUsers>;
}

/// Server-side hashtag aggregation: `GET /trending?limit&hours`.
#[allow(async_fn_in_trait)]
pub trait IRemoteTrending {
    async fn fetch_trending(&self, limit: usize, hours: u32) -> LumenResult<TrendingResponse>;
}

impl<T: IRemoteDirectory> IRemoteDirectory for Arc<T> {
    async fn search_posts(&self, query: &str) -> LumenResult<RemotePosts> {
        (**self).search_posts(query).await
    }

    async fn search_users(&self, query: &str) -> LumenResult<RemoteUsers> {
        (**self).search_users(query).await
    }
}

impl<T: IRemoteTrending> IRemoteTrending for Arc<T> {
    async fn fetch_trending(&self, limit: usize, hours: u32) -> LumenResult<TrendingResponse> {
        (**self).fetch_trending(limit, hours).await
    }
}

/// Stand-in for engines built without a remote: every call fails as offline.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineRemote;

impl IRemoteDirectory for OfflineRemote {
    async fn search_posts(&self, _query: &str) -> LumenResult<RemotePosts> {
        Err(CloudError::Offline {
            endpoint: "posts/search".into(),
        }
        .into())
    }

    async fn search_users(&self, _query: &str) -> LumenResult<RemoteUsers> {
        Err(CloudError::Offline {
            endpoint: "users/search".into(),
        }
        .into())
    }
}

impl IRemoteTrending for OfflineRemote {
    async fn fetch_trending(&self, _limit: usize, _hours: u32) -> LumenResult<TrendingResponse> {
        Err(CloudError::Offline {
            endpoint: "trending".into(),
        }
        .into())
    }
}
