//! JSON-over-HTTP GET with timeout, gzip, bearer auth, and retry with
//! exponential backoff on transport errors and 5xx responses.

use std::time::Duration;

use serde::de::DeserializeOwned;

use lumen_core::config::CloudConfig;
use lumen_core::errors::{CloudError, LumenError, LumenResult};

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    pub timeout: Duration,
    /// Retries after the first attempt. Client errors (4xx) are never retried.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub bearer_token: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from_cloud_config(&CloudConfig::default())
    }
}

impl HttpClientConfig {
    pub fn from_cloud_config(config: &CloudConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
            max_retries: 2,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(5),
            bearer_token: config.bearer_token.clone(),
        }
    }
}

fn net_err(reason: String) -> LumenError {
    CloudError::NetworkError { reason }.into()
}

#[derive(Debug)]
pub struct HttpClient {
    config: HttpClientConfig,
    #[cfg(feature = "cloud")]
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> LumenResult<Self> {
        #[cfg(feature = "cloud")]
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| net_err(e.to_string()))?;

        Ok(Self {
            config,
            #[cfg(feature = "cloud")]
            client,
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// GET `path` with `query` and decode the JSON body.
    pub async fn get<Resp: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> LumenResult<Resp> {
        let url = self.url(path);

        #[cfg(feature = "cloud")]
        {
            self.get_with_retry(&url, query).await
        }

        #[cfg(not(feature = "cloud"))]
        {
            let _ = query;
            Err(net_err(format!("cloud feature not enabled: GET {url}")))
        }
    }

    #[cfg(feature = "cloud")]
    async fn get_with_retry<Resp: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> LumenResult<Resp> {
        let mut backoff = self.config.initial_backoff;
        let mut last_err = net_err(format!("no attempt made: GET {url}"));

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    attempt,
                    max_retries = self.config.max_retries,
                    backoff_ms = backoff.as_millis() as u64,
                    "retrying GET {url}"
                );
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(self.config.max_backoff);
            }

            let mut request = self.client.get(url).query(query);
            if let Some(token) = &self.config.bearer_token {
                request = request.bearer_auth(token);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response
                            .bytes()
                            .await
                            .map_err(|e| net_err(e.to_string()))?;
                        return serde_json::from_slice(&body).map_err(|e| {
                            CloudError::Decode {
                                reason: e.to_string(),
                            }
                            .into()
                        });
                    }
                    let err: LumenError = CloudError::HttpStatus {
                        status: status.as_u16(),
                    }
                    .into();
                    if status.is_client_error() {
                        return Err(err);
                    }
                    last_err = err;
                }
                Err(e) => last_err = net_err(e.to_string()),
            }
        }

        Err(last_err)
    }
}
