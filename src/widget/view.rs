//! Rendering of a [`SearchState`] into a plain view model.
//!
//! The view carries exactly what a screen shows: the error banner, one row
//! per track and the player panel. It holds owned strings so it can be
//! printed or inspected after the state has moved on.

use crate::{
    types::{CatalogTrack, TrackTableRow},
    widget::SearchState,
};

pub const PLAY_PREVIEW_LABEL: &str = "Play Preview";
pub const NO_PREVIEW_NOTICE: &str = "No Preview Available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    PlayPreview,
    Unavailable,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::PlayPreview => PLAY_PREVIEW_LABEL,
            RowAction::Unavailable => NO_PREVIEW_NOTICE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub title: String,
    pub artists: String,
    pub action: RowAction,
}

/// The audio panel of the selected track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub heading: String,
    /// Preview URL; empty when the track has none.
    pub src: String,
    pub controls: bool,
    pub autoplay: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub error: Option<String>,
    pub rows: Vec<RowView>,
    pub player: Option<PlayerView>,
}

impl View {
    pub fn table_rows(&self) -> Vec<TrackTableRow> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| TrackTableRow {
                position: i + 1,
                title: row.title.clone(),
                artists: row.artists.clone(),
                preview: row.action.label().to_string(),
            })
            .collect()
    }
}

pub fn render<T: CatalogTrack>(state: &SearchState<T>) -> View {
    let rows = state
        .tracks()
        .iter()
        .map(|track| RowView {
            title: track.title().to_string(),
            artists: track.artist_line(),
            action: if track.is_playable() {
                RowAction::PlayPreview
            } else {
                RowAction::Unavailable
            },
        })
        .collect();

    View {
        error: state.error().map(str::to_string),
        rows,
        player: state.selected().and_then(player_for),
    }
}

fn player_for<T: CatalogTrack>(track: &T) -> Option<PlayerView> {
    let src = match track.preview_url() {
        Some(url) => url.to_string(),
        // inert empty source
        None if T::ALWAYS_PLAYABLE => String::new(),
        None => return None,
    };

    Some(PlayerView {
        heading: format!("Now Playing: {}", track.title()),
        src,
        controls: true,
        autoplay: true,
    })
}
