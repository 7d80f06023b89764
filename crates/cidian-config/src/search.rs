use std::env;

use serde::{Deserialize, Serialize};

fn default_limit() -> usize {
    20
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Default maximum result count
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl SearchConfig {
    pub fn new() -> Self {
        let limit = env::var("CIDIAN_SEARCH_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_limit);
        Self { limit }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { limit: default_limit() }
    }
}
