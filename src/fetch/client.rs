//! HTTP client for the stats endpoint.
//!
//! # Responsibilities
//! - Issue one GET per call to the configured URL
//! - Reject any status other than 200
//! - Read the whole body and release the connection on every path

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::EndpointConfig;
use crate::fetch::types::{FetchError, FetchResult};

/// Source of raw stats payloads.
#[async_trait]
pub trait StatsFetcher: Send + Sync {
    /// Fetch one raw payload.
    async fn fetch(&self) -> FetchResult<Vec<u8>>;
}

/// Fetcher backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpStatsFetcher {
    client: reqwest::Client,
    url: String,
    timeout_secs: u64,
}

impl HttpStatsFetcher {
    /// Build a fetcher for the configured endpoint.
    pub fn new(config: &EndpointConfig) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Endpoint this fetcher polls.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout_secs)
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl StatsFetcher for HttpStatsFetcher {
    async fn fetch(&self) -> FetchResult<Vec<u8>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.map_error(e))?;
        tracing::trace!(url = %self.url, bytes = body.len(), "Stats payload received");
        Ok(body.to_vec())
    }
}
