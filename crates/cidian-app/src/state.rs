use anyhow::Context;

use cidian_config::Config;
use cidian_core::{EntryStore, LexiconSource};
use cidian_favorites::{FavoritesStore, JsonFileMedium};

pub struct AppState {
    pub config: Config,
    pub store: EntryStore,
    pub favorites: FavoritesStore<JsonFileMedium>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let favorites = FavoritesStore::new(JsonFileMedium::new(config.favorites.path.as_str()));

        Self {
            config,
            store: EntryStore::new(),
            favorites,
        }
    }

    /// Load the lexicon if it is not already loaded; safe to call again.
    pub async fn ensure_loaded(&self) -> anyhow::Result<()> {
        let source = LexiconSource::from_spec(&self.config.lexicon.source);
        let entries = self
            .store
            .load(&source)
            .await
            .with_context(|| format!("loading lexicon from {}", self.config.lexicon.source))?;
        tracing::debug!("Lexicon ready: {} entries", entries.len());
        Ok(())
    }
}
