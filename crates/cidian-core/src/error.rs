use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to fetch lexicon: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Lexicon source returned status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("Failed to read lexicon file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed lexicon JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Dictionary not loaded, call load first")]
    NotLoaded,
}
