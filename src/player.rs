//! Preview playback.
//!
//! The finder does not decode audio itself. A player panel with autoplay
//! enabled hands its source URL to an [`Opener`], by default the system's
//! browser or media handler through `webbrowser`. Once started, playback
//! control belongs to that handler; no play/pause state is tracked here.

use std::io;

use crate::widget::PlayerView;

/// Something that can open a preview URL.
pub trait Opener {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the default handler of the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        webbrowser::open(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    /// The source was handed to the opener.
    Started(String),
    /// Nothing to play: no autoplay or an empty source.
    Inert,
}

pub struct Player<O: Opener = SystemOpener> {
    opener: O,
}

impl Player<SystemOpener> {
    pub fn new() -> Self {
        Self {
            opener: SystemOpener,
        }
    }
}

impl Default for Player<SystemOpener> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Opener> Player<O> {
    pub fn with_opener(opener: O) -> Self {
        Self { opener }
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Starts playback of a player panel.
    ///
    /// # Errors
    ///
    /// Returns the opener's error if the source could not be opened.
    pub fn play(&self, panel: &PlayerView) -> io::Result<Playback> {
        if !panel.autoplay || panel.src.is_empty() {
            return Ok(Playback::Inert);
        }

        self.opener.open(&panel.src)?;
        Ok(Playback::Started(panel.src.clone()))
    }
}
