use crate::{catalog::Catalog, cli, widget::Widget};

/// Runs a single search and prints the result table.
///
/// # Arguments
///
/// * `catalog` - Catalog client the widget is created with
/// * `query` - Search term, used verbatim
/// * `play` - Optional 1-based row whose preview is played after the search
///
/// A failed search is reported as a warning together with the widget's
/// error banner; the process still exits normally.
pub async fn search<C: Catalog>(catalog: C, query: String, play: Option<usize>) {
    let mut widget = Widget::new(catalog);
    widget.state_mut().set_query(query);

    cli::run_search(&mut widget).await;
    cli::print_view(&widget.view());

    if let Some(position) = play {
        cli::play_row(&mut widget, position).await;
    }
}
