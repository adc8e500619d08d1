//! HTTP client for the public book catalog (Google Books `volumes` search).
//!
//! This crate provides a thin client that:
//! - Issues a single search request with an explicit timeout
//! - Rejects non-success HTTP statuses
//! - Decodes the response body into raw catalog items
//!
//! There are no retries and no pagination: one request, one batch of at
//! most [`MAX_RESULTS_LIMIT`] items.

use std::time::Duration;

use book_data::RawItem;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

/// Volumes search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Keyword searched when none is given
pub const DEFAULT_QUERY: &str = "python";

/// Largest result window the catalog accepts in one request
pub const MAX_RESULTS_LIMIT: u32 = 40;

/// Request timeout applied when none is given
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur when talking to the catalog
#[derive(Error, Debug)]
pub enum CatalogClientError {
    /// The request could not be sent or the body could not be read
    /// (connection failure, timeout, invalid URL)
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog answered with a non-success status
    #[error("Catalog at {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body is not JSON of the expected shape
    #[error("Invalid JSON response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogClientError {
    /// True for failures of the request itself rather than of its payload.
    pub fn is_transport(&self) -> bool {
        !matches!(self, CatalogClientError::Decode { .. })
    }
}

/// Search parameters sent with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    keyword: String,
    start_index: u32,
    max_results: u32,
}

impl CatalogQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            start_index: 0,
            max_results: MAX_RESULTS_LIMIT,
        }
    }

    /// Set the result window, clamped to `1..=MAX_RESULTS_LIMIT`.
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results.clamp(1, MAX_RESULTS_LIMIT);
        self
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn start_index(&self) -> u32 {
        self.start_index
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    fn to_params(&self) -> [(&'static str, String); 3] {
        [
            ("q", self.keyword.clone()),
            ("startIndex", self.start_index.to_string()),
            ("maxResults", self.max_results.to_string()),
        ]
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY)
    }
}

/// Top-level shape of a volumes search response.
///
/// Entries stay untyped here so one malformed entry cannot fail the batch.
#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Option<Vec<Value>>,
}

/// Decode a response body into raw items.
///
/// A body without `items` (the catalog's answer to a search with no hits)
/// is an empty batch. Entries that are not objects, or whose `volumeInfo`
/// is not an object, become items without volume info.
pub fn parse_response(body: &[u8]) -> Result<Vec<RawItem>, serde_json::Error> {
    let response: VolumesResponse = serde_json::from_slice(body)?;
    Ok(response
        .items
        .unwrap_or_default()
        .into_iter()
        .map(RawItem::from_value)
        .collect())
}

/// Client for the catalog search endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Create a client for `endpoint` whose requests give up after `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, CatalogClientError> {
        let endpoint = endpoint.into();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| CatalogClientError::Transport {
                url: endpoint.clone(),
                source,
            })?;

        Ok(Self { http, endpoint })
    }

    /// Fetch one batch of raw items.
    pub async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<RawItem>, CatalogClientError> {
        info!(
            "Fetching up to {} items for '{}' from {}",
            query.max_results(),
            query.keyword(),
            self.endpoint
        );

        let transport = |source| CatalogClientError::Transport {
            url: self.endpoint.clone(),
            source,
        };

        let response = self
            .http
            .get(&self.endpoint)
            .query(&query.to_params())
            .send()
            .await
            .map_err(|e| {
                error!("Catalog request failed: {}", e);
                transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Catalog returned HTTP {}", status);
            return Err(CatalogClientError::Status {
                url: self.endpoint.clone(),
                status,
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        debug!("Received {} bytes from catalog", body.len());

        let items = parse_response(&body).map_err(|source| {
            error!("Could not decode catalog response: {}", source);
            CatalogClientError::Decode {
                url: self.endpoint.clone(),
                source,
            }
        })?;

        info!("Catalog returned {} items", items.len());
        Ok(items)
    }
}
