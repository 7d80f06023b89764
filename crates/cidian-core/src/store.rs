use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::assemble::{self, DisplayResult};
use crate::entry::{Entry, LexiconDoc};
use crate::error::{LoadError, SearchError};
use crate::search::{self, SearchOptions};

/// Where the serialized lexicon lives.
#[derive(Debug, Clone)]
pub enum LexiconSource {
    Url(String),
    File(PathBuf),
}

impl LexiconSource {
    /// Auto-detect by scheme prefix; anything else is a file path.
    pub fn from_spec(spec: &str) -> Self {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            LexiconSource::Url(spec.to_string())
        } else {
            LexiconSource::File(PathBuf::from(spec))
        }
    }
}

/// The built lexicon: the full entry sequence plus the form→entries map
/// used for exact hanzi lookup. Never mutated after build.
pub(crate) struct Loaded {
    pub(crate) entries: Vec<Arc<Entry>>,
    form_map: HashMap<String, Vec<usize>>,
}

impl Loaded {
    fn build(raw: Vec<Entry>) -> Self {
        let entries: Vec<Arc<Entry>> = raw.into_iter().map(Arc::new).collect();

        let mut form_map: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            if !entry.simplified.is_empty() {
                form_map.entry(entry.simplified.clone()).or_default().push(idx);
            }
            // an entry whose forms coincide appears once under that key
            if !entry.traditional.is_empty() && entry.traditional != entry.simplified {
                form_map.entry(entry.traditional.clone()).or_default().push(idx);
            }
        }

        Self { entries, form_map }
    }

    pub(crate) fn lookup_exact(&self, form: &str) -> Vec<Arc<Entry>> {
        self.form_map
            .get(form)
            .map(|indices| indices.iter().map(|&i| Arc::clone(&self.entries[i])).collect())
            .unwrap_or_default()
    }

    pub(crate) fn form_count(&self) -> usize {
        self.form_map.len()
    }
}

/// Load-once, read-many store over the lexicon.
///
/// `load` is idempotent: concurrent callers await the same in-flight load,
/// and later calls return the cached state without refetching. A failed
/// load leaves the store empty so a fresh call may retry.
pub struct EntryStore {
    client: reqwest::Client,
    loaded: OnceCell<Loaded>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            loaded: OnceCell::new(),
        }
    }

    pub async fn load(&self, source: &LexiconSource) -> Result<&[Arc<Entry>], LoadError> {
        let loaded = self
            .loaded
            .get_or_try_init(|| async {
                let raw = self.fetch(source).await?;
                let doc: LexiconDoc = serde_json::from_str(&raw)?;
                let loaded = Loaded::build(doc.into_entries());
                tracing::info!(
                    "Loaded {} lexicon entries ({} distinct forms)",
                    loaded.entries.len(),
                    loaded.form_count()
                );
                Ok::<_, LoadError>(loaded)
            })
            .await?;

        Ok(&loaded.entries)
    }

    async fn fetch(&self, source: &LexiconSource) -> Result<String, LoadError> {
        match source {
            LexiconSource::Url(url) => {
                let response = self.client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status { status });
                }
                Ok(response.text().await?)
            }
            LexiconSource::File(path) => {
                tokio::fs::read_to_string(path).await.map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    pub fn entry_count(&self) -> usize {
        self.loaded.get().map(|l| l.entries.len()).unwrap_or(0)
    }

    /// All entries exhibiting `form` in either script. Empty before load.
    pub fn lookup_exact(&self, form: &str) -> Vec<Arc<Entry>> {
        self.loaded.get().map(|l| l.lookup_exact(form)).unwrap_or_default()
    }

    /// The full entry sequence for linear-scan strategies. Empty before load.
    pub fn all(&self) -> &[Arc<Entry>] {
        self.loaded.get().map(|l| l.entries.as_slice()).unwrap_or(&[])
    }

    /// Resolve a free-form query into ranked, deduplicated display results.
    ///
    /// Zero matches is `Ok(empty)`, never an error.
    pub fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<DisplayResult>, SearchError> {
        let loaded = self.loaded.get().ok_or(SearchError::NotLoaded)?;

        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let hits = search::collect_hits(loaded, query);
        tracing::debug!("query '{}' produced {} raw hits", query, hits.len());

        Ok(assemble::assemble(hits, options.effective_limit()))
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}
