use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};

use crate::{
    catalog::{Catalog, SEARCH_LIMIT},
    config,
    error::SearchError,
    types::{Credentials, SpotifySearchResponse, SpotifyTrack, TokenResponse},
};

/// Client of the OAuth-secured Spotify search endpoint.
///
/// Uses the client-credentials grant. A fresh token is requested for every
/// search; tokens are never kept between calls.
pub struct SpotifyClient {
    client: Client,
    credentials: Credentials,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    /// Creates a client for the configured token and API endpoints.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_endpoints(
            credentials,
            config::spotify_apitoken_url(),
            config::spotify_apiurl(),
        )
    }

    /// Creates a client for explicit endpoints, e.g. a mock server.
    ///
    /// `api_url` is the Web API base; searches go to `{api_url}/search`.
    pub fn with_endpoints(
        credentials: Credentials,
        token_url: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            credentials,
            token_url: token_url.into(),
            api_url: api_url.into(),
        }
    }

    /// Exchanges the client credentials for a bearer token.
    ///
    /// Sends `grant_type=client_credentials` with HTTP Basic authentication
    /// built from `client_id:client_secret`. The credentials are not checked
    /// locally.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Token`] with a fixed message on a non-success status
    /// - [`SearchError::Http`] on network failures or an undecodable body
    pub async fn request_access_token(&self) -> Result<String, SearchError> {
        let response = self
            .client
            .post(&self.token_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(AUTHORIZATION, self.basic_auth_header())
            .body("grant_type=client_credentials")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::token());
        }

        let token = response.json::<TokenResponse>().await?;
        Ok(token.access_token)
    }

    /// Fetches up to [`SEARCH_LIMIT`] tracks matching `query` with `token`.
    pub async fn search_tracks(
        &self,
        token: &str,
        query: &str,
    ) -> Result<Vec<SpotifyTrack>, SearchError> {
        let api_url = format!("{uri}/search", uri = self.api_url.trim_end_matches('/'));
        let limit = SEARCH_LIMIT.to_string();

        let response = self
            .client
            .get(&api_url)
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::status());
        }

        let res = response.json::<SpotifySearchResponse>().await?;
        Ok(res.tracks.items)
    }

    fn basic_auth_header(&self) -> String {
        let raw = format!(
            "{}:{}",
            self.credentials.client_id, self.credentials.client_secret
        );
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl Catalog for SpotifyClient {
    type Track = SpotifyTrack;

    const NAME: &'static str = "Spotify";

    async fn search(&self, query: &str) -> Result<Vec<SpotifyTrack>, SearchError> {
        // token must exist before the search call is issued
        let token = self.request_access_token().await?;
        self.search_tracks(&token, query).await
    }
}
