//! RemoteApi: the remote search and trending endpoints behind the
//! `lumen-core` ports.

use tracing::debug;

use lumen_core::config::CloudConfig;
use lumen_core::errors::LumenResult;
use lumen_core::models::{RemotePosts, RemoteUsers, TrendingResponse};
use lumen_core::traits::{IRemoteDirectory, IRemoteTrending};

use crate::transport::protocol;
use crate::transport::{HttpClient, HttpClientConfig};

#[derive(Debug)]
pub struct RemoteApi {
    client: HttpClient,
}

impl RemoteApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &CloudConfig) -> LumenResult<Self> {
        Ok(Self::new(HttpClient::new(HttpClientConfig::from_cloud_config(
            config,
        ))?))
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }
}

impl IRemoteDirectory for RemoteApi {
    async fn search_posts(&self, query: &str) -> LumenResult<RemotePosts> {
        let response: RemotePosts = self
            .client
            .get(protocol::POSTS_SEARCH, &protocol::search_query(query))
            .await?;
        debug!(success = response.success, posts = response.posts.len(), "remote post search");
        Ok(response)
    }

    async fn search_users(&self, query: &str) -> LumenResult<RemoteUsers> {
        let response: RemoteUsers = self
            .client
            .get(protocol::USERS_SEARCH, &protocol::search_query(query))
            .await?;
        debug!(success = response.success, users = response.users.len(), "remote user search");
        Ok(response)
    }
}

impl IRemoteTrending for RemoteApi {
    async fn fetch_trending(&self, limit: usize, hours: u32) -> LumenResult<TrendingResponse> {
        let response: TrendingResponse = self
            .client
            .get(protocol::TRENDING, &protocol::trending_query(limit, hours))
            .await?;
        debug!(success = response.success, topics = response.data.len(), "remote trending");
        Ok(response)
    }
}
