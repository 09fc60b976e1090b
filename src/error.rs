//! Error types of the search flow.
//!
//! The taxonomy is flat. Whatever goes wrong while searching, the widget
//! state only ever shows [`SEARCH_FAILED_MESSAGE`]. The variants carry the
//! underlying cause for the command line.

use thiserror::Error;

/// Message stored in the search state after any failed search.
pub const SEARCH_FAILED_MESSAGE: &str = "An error occurred while searching for music.";

/// Fixed message of a failed token exchange.
pub const TOKEN_FAILED_MESSAGE: &str = "Failed to get access token";

/// Fixed message of a search endpoint answering with a non-success status.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch music";

#[derive(Error, Debug)]
pub enum SearchError {
    /// The token endpoint answered with a non-success status.
    #[error("{0}")]
    Token(String),

    /// The search endpoint answered with a non-success status.
    #[error("{0}")]
    Status(String),

    /// Network failure or a body that could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SearchError {
    pub fn token() -> Self {
        SearchError::Token(TOKEN_FAILED_MESSAGE.to_string())
    }

    pub fn status() -> Self {
        SearchError::Status(FETCH_FAILED_MESSAGE.to_string())
    }
}

