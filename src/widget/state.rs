use crate::{error::SEARCH_FAILED_MESSAGE, types::CatalogTrack};

/// Handed out by [`SearchState::begin_search`] and given back with the outcome.
///
/// Tickets carry a monotonically increasing sequence number. Only the
/// outcome of the most recently issued ticket is applied, so when searches
/// overlap the last one triggered wins, whatever order the responses arrive in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The query as it was when the search was triggered.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Observable phase of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Results,
    Error,
}

/// State of one search widget.
///
/// Created empty when the widget is created and dropped with it; nothing is
/// persisted.
#[derive(Debug, Clone)]
pub struct SearchState<T> {
    query: String,
    tracks: Vec<T>,
    error: Option<String>,
    selected: Option<T>,
    issued: u64,
    applied: u64,
}

impl<T: CatalogTrack> SearchState<T> {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            tracks: Vec::new(),
            error: None,
            selected: None,
            issued: 0,
            applied: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tracks(&self) -> &[T] {
        &self.tracks
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Stores the pending query verbatim. Does not trigger a search.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Issues a ticket for a search of the current query.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.issued += 1;
        SearchTicket {
            seq: self.issued,
            query: self.query.clone(),
        }
    }

    /// Whether `ticket` is still the latest issued one.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq == self.issued
    }

    /// Whether the latest issued search has not completed yet.
    pub fn is_pending(&self) -> bool {
        self.applied < self.issued
    }

    /// Replaces the track list and clears the error.
    ///
    /// Returns `false` and changes nothing if `ticket` is outdated.
    pub fn apply_success(&mut self, ticket: SearchTicket, tracks: Vec<T>) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }
        self.applied = ticket.seq;
        self.tracks = tracks;
        self.error = None;
        true
    }

    /// Sets the generic error message and leaves the track list untouched.
    ///
    /// Returns `false` and changes nothing if `ticket` is outdated.
    pub fn apply_failure(&mut self, ticket: SearchTicket) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }
        self.applied = ticket.seq;
        self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
        true
    }

    /// Applies a search outcome. The cause of a failure is not kept.
    pub fn apply<E>(&mut self, ticket: SearchTicket, outcome: Result<Vec<T>, E>) -> bool {
        match outcome {
            Ok(tracks) => self.apply_success(ticket, tracks),
            Err(_) => self.apply_failure(ticket),
        }
    }

    /// Selects the track of row `index`, replacing any prior selection.
    ///
    /// Returns `None` and keeps the prior selection if there is no such row
    /// or the row offers no play action.
    pub fn select(&mut self, index: usize) -> Option<&T> {
        let track = self.tracks.get(index).filter(|t| t.is_playable())?.clone();
        self.selected = Some(track);
        self.selected.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.applied == 0 {
            Phase::Idle
        } else if self.error.is_some() {
            Phase::Error
        } else {
            Phase::Results
        }
    }
}

impl<T: CatalogTrack> Default for SearchState<T> {
    fn default() -> Self {
        Self::new()
    }
}
