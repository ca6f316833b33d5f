use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::api::models::SearchResponse;
use crate::config::ApiConfig;

/// Errors that can occur on a single search call.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("search endpoint returned status {status}")]
    Status { status: u16 },

    /// The body was not a valid search response.
    #[error("failed to decode search response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Thin wrapper around a shared `reqwest::Client` pointed at one search
/// endpoint. Cheap to clone; each call is a single round-trip.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: String,
    api_key: String,
    image_type: String,
    orientation: String,
    safesearch: bool,
}

impl SearchClient {
    pub fn new(api: &ApiConfig, api_key: String) -> Result<Self, SearchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds as u64))
            .build()
            .map_err(SearchError::Http)?;

        Ok(Self {
            client,
            endpoint: api.endpoint.clone(),
            api_key,
            image_type: api.image_type.clone(),
            orientation: api.orientation.clone(),
            safesearch: api.safesearch,
        })
    }

    /// Fetch one page of results.
    ///
    /// `query` must be non-empty and `page >= 1`; both are the caller's
    /// obligation (the session reducer rejects an empty query before a
    /// request is ever dispatched).
    pub async fn search(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchResponse, SearchError> {
        let page = page.to_string();
        let per_page = per_page.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("page", page.as_str()),
                ("per_page", per_page.as_str()),
                ("image_type", self.image_type.as_str()),
                ("orientation", self.orientation.as_str()),
                ("safesearch", if self.safesearch { "true" } else { "false" }),
            ])
            .send()
            .await
            .map_err(SearchError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(SearchError::Decode)
    }
}
