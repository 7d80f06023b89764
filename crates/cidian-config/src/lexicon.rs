use std::env;

use serde::{Deserialize, Serialize};

fn default_source() -> String {
    "data/cedict.json".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LexiconConfig {
    /// URL or file path of the JSON lexicon
    #[serde(default = "default_source")]
    pub source: String,
}

impl LexiconConfig {
    pub fn new() -> Self {
        let source = env::var("CIDIAN_LEXICON").unwrap_or_else(|_| default_source());
        Self { source }
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self { source: default_source() }
    }
}
