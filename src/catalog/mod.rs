//! # Catalog Module
//!
//! HTTP clients for the two music catalogs the finder can search. Both sit
//! behind the [`Catalog`] trait so the widget does not care which one it
//! talks to:
//!
//! ```text
//! Widget (state, rendering)
//!          ↓
//! Catalog trait
//!     ├── iTunes (anonymous GET)
//!     └── Spotify (client-credentials token, then bearer GET)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! Every search issues exactly one search request with the query URL-escaped
//! and [`SEARCH_LIMIT`] applied. Spotify first exchanges its client
//! credentials for a bearer token, on every search. Nothing is retried or
//! cached.

use std::future::Future;

use crate::{error::SearchError, types::CatalogTrack};

pub mod itunes;
pub mod spotify;

pub use itunes::ItunesClient;
pub use spotify::SpotifyClient;

/// Maximum number of tracks requested per search.
pub const SEARCH_LIMIT: u32 = 10;

/// A music catalog that can be searched for tracks.
pub trait Catalog {
    type Track: CatalogTrack;

    /// Display name used in command-line output.
    const NAME: &'static str;

    /// Runs one search for `query` and returns the tracks in response order.
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Self::Track>, SearchError>> + Send;
}
