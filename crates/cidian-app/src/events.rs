use std::sync::Arc;

use kanal::AsyncReceiver;

use cidian_core::{DisplayResult, SearchOptions};

use crate::render;
use crate::state::AppState;

/// Events flowing from the input reader into the session loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Search(String),
    AddFavorite(usize),
    ShowFavorites,
    RemoveFavorite(String),
    ClearFavorites,
    Quit,
}

/// Parse one repl line into an event. Lines starting with ':' are
/// commands; anything else is a search query.
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(command) = line.strip_prefix(':') {
        let mut parts = command.split_whitespace();
        return match (parts.next()?, parts.next()) {
            ("q" | "quit", _) => Some(AppEvent::Quit),
            ("favs", _) => Some(AppEvent::ShowFavorites),
            ("fav", Some(n)) => n.parse().ok().map(AppEvent::AddFavorite),
            ("rm", Some(key)) => Some(AppEvent::RemoveFavorite(key.to_string())),
            ("clear", _) => Some(AppEvent::ClearFavorites),
            _ => None,
        };
    }

    Some(AppEvent::Search(line.to_string()))
}

/// Session main loop: search, show, favorite.
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    // displayed results, addressed by :fav N
    let mut last_results: Vec<DisplayResult> = Vec::new();

    loop {
        let event = input_rx.recv().await?;
        tracing::debug!("repl event: {:?}", std::mem::discriminant(&event));

        match event {
            AppEvent::Search(query) => {
                let limit = state.config.search.limit;
                match state.store.search(&query, &SearchOptions { limit }) {
                    Ok(results) => {
                        render::print_results(&results, false);
                        last_results = results;
                    }
                    Err(e) => tracing::error!("search failed: {e}"),
                }
            }
            AppEvent::AddFavorite(index) => match last_results.get(index.wrapping_sub(1)) {
                Some(result) => {
                    let records = state.favorites.add(&result.entry).await?;
                    println!("Added {} ({} favorites)", result.format().hanzi, records.len());
                }
                None => println!("No result #{index} on screen"),
            },
            AppEvent::ShowFavorites => {
                render::print_favorites(&state.favorites.list().await);
            }
            AppEvent::RemoveFavorite(key) => {
                let records = state.favorites.remove(&key).await?;
                println!("{} favorites remain", records.len());
            }
            AppEvent::ClearFavorites => {
                state.favorites.clear().await?;
                println!("Favorites cleared");
            }
            AppEvent::Quit => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_query() {
        assert!(matches!(parse_line("ni hao"), Some(AppEvent::Search(q)) if q == "ni hao"));
        assert!(matches!(parse_line("  你好  "), Some(AppEvent::Search(q)) if q == "你好"));
    }

    #[test]
    fn test_parse_line_commands() {
        assert!(matches!(parse_line(":q"), Some(AppEvent::Quit)));
        assert!(matches!(parse_line(":quit"), Some(AppEvent::Quit)));
        assert!(matches!(parse_line(":favs"), Some(AppEvent::ShowFavorites)));
        assert!(matches!(parse_line(":fav 3"), Some(AppEvent::AddFavorite(3))));
        assert!(matches!(parse_line(":clear"), Some(AppEvent::ClearFavorites)));
        assert!(
            matches!(parse_line(":rm 好__hao"), Some(AppEvent::RemoveFavorite(k)) if k == "好__hao")
        );
    }

    #[test]
    fn test_parse_line_rejects_garbage() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line(":").is_none());
        assert!(parse_line(":fav").is_none());
        assert!(parse_line(":fav x").is_none());
        assert!(parse_line(":wat").is_none());
    }
}
