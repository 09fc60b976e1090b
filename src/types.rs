use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A track as shown by the widget, independent of the catalog it came from.
pub trait CatalogTrack: Clone {
    /// Whether the catalog offers the play action for rows without a preview.
    ///
    /// The iTunes widget always offers it and binds an empty source; the
    /// Spotify widget shows a "No Preview Available" notice instead.
    const ALWAYS_PLAYABLE: bool;

    fn title(&self) -> &str;
    fn artist_line(&self) -> String;
    fn preview_url(&self) -> Option<&str>;

    /// Whether the row of this track offers the play action.
    fn is_playable(&self) -> bool {
        Self::ALWAYS_PLAYABLE || self.preview_url().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItunesTrack {
    pub track_id: u64,
    pub track_name: String,
    pub artist_name: String,
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl CatalogTrack for ItunesTrack {
    const ALWAYS_PLAYABLE: bool = true;

    fn title(&self) -> &str {
        &self.track_name
    }

    fn artist_line(&self) -> String {
        self.artist_name.clone()
    }

    fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }
}

/// Raw search response. Results are kept undecoded because a search can
/// also match entries that are not tracks, such as audiobooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItunesSearchResponse {
    pub results: Vec<serde_json::Value>,
}

impl ItunesSearchResponse {
    /// Decodes the track entries in response order and skips the rest.
    pub fn into_tracks(self) -> Vec<ItunesTrack> {
        self.results
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotifyTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<SpotifyArtist>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl CatalogTrack for SpotifyTrack {
    const ALWAYS_PLAYABLE: bool = false;

    fn title(&self) -> &str {
        &self.name
    }

    fn artist_line(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifySearchResponse {
    pub tracks: SpotifyTrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyTrackPage {
    pub items: Vec<SpotifyTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Client credentials of the Spotify variant.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Artists")]
    pub artists: String,
    #[tabled(rename = "Preview")]
    pub preview: String,
}
