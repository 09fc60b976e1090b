//! # Widget Module
//!
//! One search widget is a catalog client plus the [`SearchState`] it owns.
//! Input, search, selection and rendering all go through the widget; two
//! widgets never share anything.
//!
//! ```text
//! set_query → search → {Results | Error}
//!                 ↓
//!      select(row) → view() → player panel
//! ```

mod state;
pub mod view;

pub use state::{Phase, SearchState, SearchTicket};
pub use view::{PlayerView, RowAction, RowView, View};

use crate::{catalog::Catalog, error::SearchError};

pub struct Widget<C: Catalog> {
    catalog: C,
    state: SearchState<C::Track>,
}

impl<C: Catalog> Widget<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            state: SearchState::new(),
        }
    }

    pub fn state(&self) -> &SearchState<C::Track> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SearchState<C::Track> {
        &mut self.state
    }

    /// Searches the catalog for the current query and applies the outcome.
    ///
    /// The state is updated either way. On failure the state only holds the
    /// generic message; the cause is returned so the caller may report it.
    pub async fn search(&mut self) -> Result<usize, SearchError> {
        let ticket = self.state.begin_search();
        let outcome = self.catalog.search(ticket.query()).await;
        match outcome {
            Ok(tracks) => {
                let count = tracks.len();
                self.state.apply_success(ticket, tracks);
                Ok(count)
            }
            Err(e) => {
                self.state.apply_failure(ticket);
                Err(e)
            }
        }
    }

    pub fn select(&mut self, index: usize) -> Option<&C::Track> {
        self.state.select(index)
    }

    pub fn view(&self) -> View {
        view::render(&self.state)
    }
}
