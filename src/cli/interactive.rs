use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{Res, catalog::Catalog, cli, info, warning, widget::Widget};

/// One line typed into an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Plain text: becomes the query and triggers a search. A leading `::`
    /// stands for a literal `:`.
    Query(String),
    /// `:search` re-runs the current query.
    Search,
    /// `:play N` selects and plays row N (1-based).
    Play(usize),
    /// `:list` prints the current view again.
    List,
    /// `:help`
    Help,
    /// `:quit` or `:q`
    Quit,
    Unknown(String),
}

/// Parses a session line. Anything not starting with `:` is a query, kept
/// verbatim. `::text` searches for `:text`.
pub fn parse_input(line: &str) -> Input {
    let Some(command) = line.strip_prefix(':') else {
        return Input::Query(line.to_string());
    };
    if command.starts_with(':') {
        return Input::Query(command.to_string());
    }

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("search"), None, None) => Input::Search,
        (Some("list"), None, None) => Input::List,
        (Some("help"), None, None) => Input::Help,
        (Some("quit" | "q"), None, None) => Input::Quit,
        (Some("play"), Some(n), None) => match n.parse::<usize>() {
            Ok(position) => Input::Play(position),
            Err(_) => Input::Unknown(line.to_string()),
        },
        _ => Input::Unknown(line.to_string()),
    }
}

fn print_help() {
    info!("Type a search term and press enter to search.");
    info!("Start the term with :: to search for text beginning with :");
    info!(":search   search the current query again");
    info!(":play N   play the preview of row N");
    info!(":list     show the current results");
    info!(":quit     leave the session");
}

/// Runs an interactive session on one widget until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading from stdin or writing the prompt fails.
pub async fn interactive<C: Catalog>(catalog: C) -> Res<()> {
    let mut widget = Widget::new(catalog);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Music Finder ({}). Type :help for commands.", C::NAME);

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            Input::Query(query) => {
                widget.state_mut().set_query(query);
                cli::run_search(&mut widget).await;
                cli::print_view(&widget.view());
            }
            Input::Search => {
                cli::run_search(&mut widget).await;
                cli::print_view(&widget.view());
            }
            Input::Play(position) => cli::play_row(&mut widget, position).await,
            Input::List => cli::print_view(&widget.view()),
            Input::Help => print_help(),
            Input::Quit => break,
            Input::Unknown(text) => warning!("Unknown command: {}", text),
        }
    }

    Ok(())
}
