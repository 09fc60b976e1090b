use reqwest::Client;

use crate::{
    catalog::{Catalog, SEARCH_LIMIT},
    config,
    error::SearchError,
    types::{ItunesSearchResponse, ItunesTrack},
};

/// Client of the public, unauthenticated iTunes search endpoint.
pub struct ItunesClient {
    client: Client,
    search_url: String,
}

impl ItunesClient {
    /// Creates a client for the configured search endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(config::itunes_search_url())
    }

    /// Creates a client for an explicit search endpoint, e.g. a mock server.
    pub fn with_endpoint(search_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            search_url: search_url.into(),
        }
    }

    /// Fetches up to [`SEARCH_LIMIT`] tracks matching `term`.
    ///
    /// Results without a track id, name or artist are left out.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Status`] if the endpoint answers with a non-success status
    /// - [`SearchError::Http`] on network failures or an undecodable body
    pub async fn search_tracks(&self, term: &str) -> Result<Vec<ItunesTrack>, SearchError> {
        let limit = SEARCH_LIMIT.to_string();
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("term", term), ("limit", limit.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::status());
        }

        let res = response.json::<ItunesSearchResponse>().await?;
        Ok(res.into_tracks())
    }
}

impl Default for ItunesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for ItunesClient {
    type Track = ItunesTrack;

    const NAME: &'static str = "iTunes";

    async fn search(&self, query: &str) -> Result<Vec<ItunesTrack>, SearchError> {
        self.search_tracks(query).await
    }
}
