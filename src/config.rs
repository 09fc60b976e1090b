//! Configuration management for the Music Finder.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The only secrets are the Spotify client
//! credentials; every endpoint URL has a default and can be overridden, which
//! is how a local mock server or proxy is plugged in.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoint URLs only)

use std::{env, path::PathBuf};

use crate::{error::SearchError, types::Credentials};

pub const DEFAULT_ITUNES_SEARCH_URL: &str = "https://itunes.apple.com/search";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up under `musicfinder/.env` in the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/musicfinder/.env`
/// - macOS: `~/Library/Application Support/musicfinder/.env`
/// - Windows: `%LOCALAPPDATA%/musicfinder/.env`
///
/// A missing file is fine: values may come from the process environment
/// alone. Variables that are already set are not overridden.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be read or parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if async_fs::metadata(&path).await.is_err() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("musicfinder/.env");
    path
}

/// Returns the Spotify client ID (`SPOTIFY_CLIENT_ID`).
pub fn spotify_client_id() -> Result<String, SearchError> {
    env::var("SPOTIFY_CLIENT_ID")
        .map_err(|e| SearchError::Configuration(format!("SPOTIFY_CLIENT_ID: {}", e)))
}

/// Returns the Spotify client secret (`SPOTIFY_CLIENT_SECRET`).
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> Result<String, SearchError> {
    env::var("SPOTIFY_CLIENT_SECRET")
        .map_err(|e| SearchError::Configuration(format!("SPOTIFY_CLIENT_SECRET: {}", e)))
}

/// Returns both Spotify credentials, or the first one that is missing.
///
/// The values themselves are not validated; an empty id or secret is passed
/// on to the token endpoint as-is.
pub fn spotify_credentials() -> Result<Credentials, SearchError> {
    Ok(Credentials::new(spotify_client_id()?, spotify_client_secret()?))
}

/// Returns the iTunes search endpoint (`ITUNES_SEARCH_URL`).
pub fn itunes_search_url() -> String {
    env::var("ITUNES_SEARCH_URL").unwrap_or_else(|_| DEFAULT_ITUNES_SEARCH_URL.to_string())
}

/// Returns the Spotify token exchange URL (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string())
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}
