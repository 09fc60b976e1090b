//! # CLI Module
//!
//! The terminal front end of the finder. Each command owns exactly one
//! [`Widget`](crate::widget::Widget) for the catalog it was started with and
//! drops it on exit.
//!
//! ## Commands
//!
//! - [`search`] - One search, print the results, optionally play a row
//! - [`interactive`] - A session that keeps one widget alive between searches
//!
//! ## Output
//!
//! Results are printed as a numbered table. The error banner of the widget
//! is printed above it, the player panel below it. While a request is in
//! flight a spinner is shown on the terminal; the widget state itself has no
//! loading phase.
//!
//! ## Usage Patterns
//!
//! ```bash
//! musicfinder itunes adele                 # Search the iTunes catalog
//! musicfinder spotify adele --play 1       # Search Spotify, play row 1
//! musicfinder interactive --catalog spotify
//! ```

mod interactive;
mod search;

pub use interactive::{Input, interactive, parse_input};
pub use search::search;

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    catalog::Catalog,
    player::{Playback, Player},
    success, warning,
    widget::{View, Widget, view::NO_PREVIEW_NOTICE},
};

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

async fn run_search<C: Catalog>(widget: &mut Widget<C>) {
    let pb = spinner(format!("Searching {}...", C::NAME));
    let result = widget.search().await;
    pb.finish_and_clear();

    match result {
        Ok(count) => success!("Found {} tracks on {}", count, C::NAME),
        Err(e) => warning!("Search failed: {}", e),
    }
}

fn print_view(view: &View) {
    if let Some(error) = &view.error {
        println!("{}", error.red().bold());
    }

    if view.rows.is_empty() {
        println!("No tracks to show.");
    } else {
        println!("{}", Table::new(view.table_rows()));
    }

    if let Some(panel) = &view.player {
        println!("{}", panel.heading.bold());
    }
}

/// Selects the row at 1-based `position` and plays its preview.
///
/// The default handler is launched on the blocking pool.
async fn play_row<C: Catalog>(widget: &mut Widget<C>, position: usize) {
    let row_count = widget.state().tracks().len();
    if row_count == 0 {
        warning!("There are no results to play. Search first.");
        return;
    }

    let Some(index) = position.checked_sub(1).filter(|i| *i < row_count) else {
        warning!("There is no row {} (rows 1-{}).", position, row_count);
        return;
    };

    if widget.select(index).is_none() {
        warning!("Row {}: {}", position, NO_PREVIEW_NOTICE);
        return;
    }

    let Some(panel) = widget.view().player else {
        warning!("Row {}: {}", position, NO_PREVIEW_NOTICE);
        return;
    };

    println!("{}", panel.heading.bold());
    let src = panel.src.clone();
    let playback = tokio::task::spawn_blocking(move || Player::new().play(&panel)).await;

    match playback {
        Ok(Ok(Playback::Started(url))) => success!("Playing preview {}", url),
        Ok(Ok(Playback::Inert)) => warning!("This track has no preview source."),
        Ok(Err(e)) => warning!(
            "Failed to open the preview. Please open the following URL manually:\n{}\n({})",
            src,
            e
        ),
        Err(e) => warning!("Playback task failed: {}", e),
    }
}
