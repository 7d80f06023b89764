use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use cidian_core::SearchOptions;

mod controller;
mod events;
mod io;
mod render;
mod state;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "cidian", about = "Mandarin dictionary search", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the dictionary
    Search {
        query: String,
        /// Maximum number of results
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Show match scores
        #[arg(long)]
        scores: bool,
    },
    /// Manage the favorites set
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Convert a CC-CEDICT .u8 corpus into the JSON lexicon
    Convert { input: PathBuf, output: PathBuf },
    /// Interactive search-and-favorite session
    Repl,
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List stored favorites
    List,
    /// Search and add the top-ranked hit
    Add { query: String },
    /// Remove a favorite by its identity key
    Remove { key: String },
    /// Remove all favorites
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = cidian_config::Config::new();
    let state = Arc::new(AppState::new(config));

    match cli.command {
        Command::Search { query, limit, scores } => {
            state.ensure_loaded().await?;
            let results = state.store.search(&query, &SearchOptions { limit })?;
            render::print_results(&results, scores);
        }
        Command::Favorites { action } => run_favorites(&state, action).await?,
        Command::Convert { input, output } => {
            let count = cidian_cedict::convert(&input, &output)?;
            println!("Converted {count} entries to {}", output.display());
        }
        Command::Repl => controller::run_repl(state).await?,
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr)
        .init();
}

async fn run_favorites(state: &AppState, action: FavoritesAction) -> anyhow::Result<()> {
    match action {
        FavoritesAction::List => {
            render::print_favorites(&state.favorites.list().await);
        }
        FavoritesAction::Add { query } => {
            state.ensure_loaded().await?;
            let results = state.store.search(&query, &SearchOptions::default())?;
            match results.first() {
                Some(top) => {
                    let records = state.favorites.add(&top.entry).await?;
                    println!("Added {} ({} favorites)", top.format().hanzi, records.len());
                }
                None => println!("No match for '{query}'"),
            }
        }
        FavoritesAction::Remove { key } => {
            let records = state.favorites.remove(&key).await?;
            println!("{} favorites remain", records.len());
        }
        FavoritesAction::Clear => {
            state.favorites.clear().await?;
            println!("Favorites cleared");
        }
    }
    Ok(())
}
