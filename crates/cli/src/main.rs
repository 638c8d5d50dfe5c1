//! PhotoGrid CLI — browse and search photos from the terminal.
//!
//! Drives `photogrid-core` directly: the same controller, pagination, and query
//! history the desktop app uses.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use photogrid_core::controller::{GalleryController, LoadOutcome};
use photogrid_core::history::{FileStore, QueryHistory};
use photogrid_core::types::{image_url, ImageSize, Photo};
use photogrid_core::{FlickrClient, GalleryConfig, GalleryError, Result};

/// PhotoGrid CLI — recent photos, search, and search history from the terminal.
#[derive(Parser)]
#[command(name = "photogrid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Config file (default: ~/.photogrid/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List recent photos
    Recent {
        /// First page to fetch (1-indexed)
        #[arg(long, default_value = "1")]
        page: u32,

        /// Number of consecutive pages to fetch
        #[arg(long, default_value = "1")]
        pages: u32,
    },
    /// Search photos by free text (recorded in search history)
    Search {
        /// Search text
        query: String,

        /// First page to fetch (1-indexed)
        #[arg(long, default_value = "1")]
        page: u32,

        /// Number of consecutive pages to fetch
        #[arg(long, default_value = "1")]
        pages: u32,
    },
    /// Show or clear the search history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Print the image URL for a photo
    Url {
        id: String,
        server: String,
        farm: u64,
        secret: String,

        /// Size suffix (s, q, t, m, w, z, c, b)
        #[arg(long, default_value = "w")]
        size: char,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List past searches, most recent first
    List,
    /// Remove every saved search
    Clear,
}

fn load_config(path: Option<&PathBuf>) -> GalleryConfig {
    match path {
        Some(p) => GalleryConfig::load_from(p),
        None => GalleryConfig::load(),
    }
}

fn open_history(config: &GalleryConfig) -> Result<QueryHistory<FileStore>> {
    let store = FileStore::in_data_dir()
        .ok_or_else(|| GalleryError::Storage("Could not determine data directory".into()))?;
    debug!(path = %store.path().display(), "Opening search history");
    Ok(QueryHistory::load(store, config.history_key.clone()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("photogrid=warn".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref());

    match cli.command {
        Commands::Recent { page, pages } => {
            let photos = fetch(&config, "", page, pages).await?;
            print_photos(&photos, cli.json, "No recent photos");
        }
        Commands::Search { query, page, pages } => {
            let photos = fetch(&config, &query, page, pages).await?;
            let mut history = open_history(&config)?;
            history.record(&query)?;
            print_photos(&photos, cli.json, &format!("No results for '{query}'"));
        }
        Commands::History { action: HistoryAction::List } => {
            let history = open_history(&config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(history.entries())?);
            } else if history.is_empty() {
                eprintln!("No search history");
            } else {
                for entry in history.entries() {
                    println!("{entry}");
                }
            }
        }
        Commands::History { action: HistoryAction::Clear } => {
            let mut history = open_history(&config)?;
            let count = history.len();
            history.clear()?;
            eprintln!("Cleared {count} saved searches");
        }
        Commands::Url { id, server, farm, secret, size } => {
            let size = ImageSize::from_suffix(size)
                .ok_or_else(|| GalleryError::Config(format!("Unknown size suffix '{size}'")))?;
            println!("{}", image_url(&id, &server, farm, &secret, size));
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "photogrid", &mut std::io::stdout());
        }
    }
    Ok(())
}

/// Fetch `pages` consecutive pages starting at `page`, the way scrolling would.
async fn fetch(config: &GalleryConfig, query: &str, page: u32, pages: u32) -> Result<Vec<Photo>> {
    let client = FlickrClient::new(config)?;
    let mut gallery = GalleryController::new(client, config.per_page);

    // Later pages fail quietly like scrolling does; the first one is reported.
    gallery.try_load_page(query, page).await?;

    for _ in 1..pages.max(1) {
        match gallery.load_more().await {
            Some(LoadOutcome::Appended(_)) => {}
            Some(LoadOutcome::Failed) => {
                eprintln!("Stopped after page {}: request failed", gallery.state().page());
                break;
            }
            _ => break,
        }
    }

    let state = gallery.state();
    debug!(
        loaded = state.photos().len(),
        page = state.page(),
        total = state.cursor().total(),
        "fetch finished"
    );
    Ok(state.photos().to_vec())
}

fn print_photos(photos: &[Photo], json: bool, empty_message: &str) {
    if json {
        let items: Vec<serde_json::Value> = photos
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id,
                    "title": p.display_title(),
                    "description": p.description_text(),
                    "thumbnail": p.image_url(ImageSize::GRID),
                    "image": p.image_url(ImageSize::DETAIL),
                })
            })
            .collect();
        match serde_json::to_string_pretty(&items) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Could not encode output: {e}"),
        }
        return;
    }

    if photos.is_empty() {
        eprintln!("{empty_message}");
        return;
    }
    for p in photos {
        println!("{:<14} {:<50} {}", p.id, truncate(p.display_title(), 50), p.image_url(ImageSize::GRID));
    }
    eprintln!("\n{} photos", photos.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}
