use clap::{
    CommandFactory, Parser, Subcommand, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use musicfinder::{
    catalog::{ItunesClient, SpotifyClient},
    cli, config, error,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the public iTunes catalog
    Itunes(SearchOptions),

    /// Search the Spotify catalog (needs client credentials)
    Spotify(SearchOptions),

    /// Keep a search widget open and search repeatedly
    Interactive(InteractiveOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search term; several words are joined with spaces
    #[clap(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Play the preview of this row (1-based) after searching
    #[clap(long)]
    pub play: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CatalogKind {
    Itunes,
    Spotify,
}

#[derive(Parser, Debug, Clone)]
pub struct InteractiveOptions {
    /// Catalog the session searches
    #[clap(long, value_enum, default_value = "itunes")]
    pub catalog: CatalogKind,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn spotify_client() -> SpotifyClient {
    match config::spotify_credentials() {
        Ok(credentials) => SpotifyClient::new(credentials),
        Err(e) => error!(
            "Missing Spotify credentials. Set them in {}\n Error: {}",
            config::env_file_path().display(),
            e
        ),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Itunes(opt) => {
            cli::search(ItunesClient::new(), opt.query.join(" "), opt.play).await;
        }
        Command::Spotify(opt) => {
            cli::search(spotify_client(), opt.query.join(" "), opt.play).await;
        }
        Command::Interactive(opt) => {
            let result = match opt.catalog {
                CatalogKind::Itunes => cli::interactive(ItunesClient::new()).await,
                CatalogKind::Spotify => cli::interactive(spotify_client()).await,
            };
            if let Err(e) = result {
                error!("Interactive session failed. Err: {}", e);
            }
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
