//! Music Finder Library
//!
//! This library provides a small music catalog search client. A user types a
//! search term, the library queries either the public iTunes catalog or the
//! OAuth-secured Spotify catalog, keeps the matching tracks in a per-widget
//! search state and renders them together with a preview player.
//!
//! # Modules
//!
//! - `catalog` - HTTP clients for the iTunes and Spotify catalogs
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types of the search flow
//! - `player` - Preview playback through the system's default handler
//! - `types` - Data structures and type definitions
//! - `widget` - Search state, update functions and rendering
//!
//! # Example
//!
//! ```
//! use musicfinder::{catalog::ItunesClient, widget::Widget};
//!
//! #[tokio::main]
//! async fn main() -> musicfinder::Res<()> {
//!     let mut widget = Widget::new(ItunesClient::new());
//!     widget.state_mut().set_query("Adele");
//!     widget.search().await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod player;
pub mod types;
pub mod widget;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the command-line boundary where errors of different origins
/// (configuration, terminal I/O, HTTP) meet. Keeps Send + Sync bounds for
/// async contexts.
///
/// # Example
///
/// ```
/// use musicfinder::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching the iTunes catalog...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal errors at the command-line boundary, such as missing
/// credentials. Code after this macro will not execute.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, for example a failed search or a track that
/// has no preview to play.
///
/// # Example
///
/// ```
/// warning!("An error occurred while searching for music.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
