//! Texture record fetching.
//!
//! [`ConfigFetcher`] is the seam between the controller driver and the
//! network. [`HttpFetcher`] is the production implementation: one `GET` per
//! request, path `base_url + endpoint + "/" + leaf`, query parameters from
//! the request. Fetchers own no state beyond their transport.

use async_trait::async_trait;
use shitsukan_core::FetchRequest;
use shitsukan_types::{ConfigurationRecord, DecodeError, LeafId};
use thiserror::Error;
use tracing::{debug, trace};

use crate::constants::REQUEST_TIMEOUT;

/// Why a texture record could not be fetched.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, timeout, or body read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("HTTP {status} for texture {leaf}")]
    Status { status: u16, leaf: LeafId },

    /// Body did not decode into a texture record.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Scripted or otherwise synthetic failure.
    #[error("{0}")]
    Other(String),
}

/// Retrieves the texture record named by a fetch request.
#[async_trait]
pub trait ConfigFetcher: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> Result<ConfigurationRecord, FetchError>;
}

/// reqwest-backed fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Build a fetcher with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Use a preconfigured client (TLS roots, proxies, custom timeouts).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    /// Full URL for a request, without the query string.
    pub fn url_for(&self, request: &FetchRequest) -> String {
        let base = self.base_url.trim_end_matches('/');
        let endpoint = request.endpoint.trim_end_matches('/');
        let sep = if endpoint.starts_with('/') || endpoint.is_empty() { "" } else { "/" };
        format!(
            "{}{}{}/{}",
            base,
            sep,
            endpoint,
            urlencoding::encode(request.leaf_id.as_str())
        )
    }
}

#[async_trait]
impl ConfigFetcher for HttpFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<ConfigurationRecord, FetchError> {
        let url = self.url_for(request);
        debug!(url = %url, generation = request.generation.0, "fetching texture record");

        let resp = self.client.get(&url).query(&request.query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                leaf: request.leaf_id.clone(),
            });
        }

        let body = resp.bytes().await?;
        trace!(bytes = body.len(), "texture record body received");
        Ok(ConfigurationRecord::decode(&body)?)
    }
}
