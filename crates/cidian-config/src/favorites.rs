use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "favorites.json".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FavoritesConfig {
    /// File holding the persisted favorites blob
    #[serde(default = "default_path")]
    pub path: String,
}

impl FavoritesConfig {
    pub fn new() -> Self {
        let path = env::var("CIDIAN_FAVORITES_PATH").unwrap_or_else(|_| default_path());
        Self { path }
    }
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self { path: default_path() }
    }
}
