use serde::{Deserialize, Serialize};

use self::favorites::FavoritesConfig;
use self::lexicon::LexiconConfig;
use self::search::SearchConfig;

pub mod favorites;
pub mod lexicon;
pub mod search;

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lexicon: LexiconConfig,
    pub favorites: FavoritesConfig,
    pub search: SearchConfig,
}

impl Config {
    /// Defaults overridden by `CIDIAN_*` environment variables.
    pub fn new() -> Self {
        Config {
            lexicon: LexiconConfig::new(),
            favorites: FavoritesConfig::new(),
            search: SearchConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lexicon: LexiconConfig::default(),
            favorites: FavoritesConfig::default(),
            search: SearchConfig::default(),
        }
    }
}
