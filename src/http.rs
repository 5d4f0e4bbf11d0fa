//! Thin JSON client for the gateway sitting in front of the catalog and
//! order services.
//!
//! Single-shot requests only: no retry and no timeout. Any non-2xx status
//! is turned into [`CafeError::Status`].

use crate::error::{CafeError, Result};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| CafeError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base URL and an absolute path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        self.send(self.client.get(&url), url).await
    }

    /// POSTs `body` as JSON (sets `Content-Type: application/json`).
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        self.send(self.client.post(&url).json(body), url).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: String) -> Result<T> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CafeError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!("Response body: {:?}", String::from_utf8_lossy(&bytes));
            CafeError::Decode(e)
        })
    }
}
