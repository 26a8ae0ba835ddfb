//! HTTP transport for the static content documents.

use std::time::Duration;

use async_trait::async_trait;
use folio_core::fetch::{FetchError, ResourceSource, Result as FetchResult};
use reqwest::header::ACCEPT;

use crate::config::Config;
use crate::error::Result;

/// Request timeout used when none is configured.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the static content documents.
#[derive(Debug, Clone)]
pub struct FolioClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl FolioClient {
    /// Create a new client with the given base URL and the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a new client with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Create from a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::with_timeout(&config.data_base_url, config.fetch_timeout())
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for a document path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn network_error(&self, url: &str, err: reqwest::Error) -> FetchError {
        let reason = if err.is_timeout() {
            format!("request timed out after {:?}", self.timeout)
        } else {
            err.to_string()
        };
        FetchError::Network {
            url: url.to_string(),
            reason,
        }
    }

    /// Turn a response into its body, or a status error.
    async fn handle_response(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> FetchResult<Vec<u8>> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.network_error(url, e))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl ResourceSource for FolioClient {
    async fn get(&self, path: &str) -> FetchResult<Vec<u8>> {
        let url = self.url(path);
        tracing::debug!(url = %url, "Fetching document");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.network_error(&url, e))?;

        self.handle_response(&url, response).await
    }

    fn locate(&self, path: &str) -> String {
        self.url(path)
    }
}
