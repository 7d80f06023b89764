use serde::{Deserialize, Serialize};

use cidian_core::Entry;
use cidian_pinyin::strip_tone_digits;

pub mod medium;

pub use medium::{FavoritesMedium, JsonFileMedium, MemoryMedium};

/// Identity key for "the same dictionary sense": headword form plus the
/// tone-digit-stripped first reading. The key, not object identity, is the
/// handle for every favorites operation.
pub fn identity_key(entry: &Entry) -> String {
    format!("{}__{}", entry.form(), strip_tone_digits(entry.first_pinyin()))
}

/// A persisted user-selected entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub key: String,
    #[serde(default)]
    pub simplified: String,
    #[serde(default)]
    pub traditional: String,
    #[serde(default)]
    pub pinyin: Vec<String>,
    #[serde(default)]
    pub definitions: Vec<String>,
}

impl FavoriteRecord {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            key: identity_key(entry),
            simplified: entry.simplified.clone(),
            traditional: entry.traditional.clone(),
            pinyin: one_or_empty(&entry.pinyin),
            definitions: one_or_empty(&entry.definitions),
        }
    }
}

// missing fields normalize to a one-element sequence of the empty string
fn one_or_empty(values: &[String]) -> Vec<String> {
    if values.is_empty() {
        vec![String::new()]
    } else {
        values.to_vec()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("Failed to read favorites: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to persist favorites: {0}")]
    Write(#[source] std::io::Error),

    #[error("Malformed favorites data: {0}")]
    Json(#[from] serde_json::Error),
}

/// The persisted favorites set, most-recent-first, stored as one JSON blob
/// behind a [`FavoritesMedium`].
pub struct FavoritesStore<M: FavoritesMedium> {
    medium: M,
}

impl<M: FavoritesMedium> FavoritesStore<M> {
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// The set in stored order. A corrupt or unreadable blob is reported
    /// and treated as empty rather than propagated.
    pub async fn list(&self) -> Vec<FavoriteRecord> {
        match self.read_records().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Failed to load favorites, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Insert a record for `entry` at the front; a no-op if its identity
    /// key is already present.
    pub async fn add(&self, entry: &Entry) -> Result<Vec<FavoriteRecord>, FavoritesError> {
        let mut records = self.list().await;

        let key = identity_key(entry);
        if records.iter().any(|r| r.key == key) {
            return Ok(records);
        }

        records.insert(0, FavoriteRecord::from_entry(entry));
        self.persist(&records).await?;
        Ok(records)
    }

    /// Remove every record with `key` (at most one, by invariant).
    pub async fn remove(&self, key: &str) -> Result<Vec<FavoriteRecord>, FavoritesError> {
        let mut records = self.list().await;
        records.retain(|r| r.key != key);
        self.persist(&records).await?;
        Ok(records)
    }

    pub async fn clear(&self) -> Result<(), FavoritesError> {
        self.persist(&[]).await
    }

    async fn read_records(&self) -> Result<Vec<FavoriteRecord>, FavoritesError> {
        match self.medium.read().await? {
            None => Ok(Vec::new()),
            Some(blob) => Ok(serde_json::from_str(&blob)?),
        }
    }

    async fn persist(&self, records: &[FavoriteRecord]) -> Result<(), FavoritesError> {
        let blob = serde_json::to_string(records)?;
        self.medium.write(&blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(simplified: &str, pinyin: &[&str], definitions: &[&str]) -> Entry {
        Entry {
            simplified: simplified.to_string(),
            traditional: simplified.to_string(),
            pinyin: pinyin.iter().map(|s| s.to_string()).collect(),
            definitions: definitions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_identity_key_strips_tone_digits() {
        let e = entry("你好", &["Ni3 Hao3"], &["hello"]);
        assert_eq!(identity_key(&e), "你好__ni hao");
    }

    #[test]
    fn test_identity_key_falls_back_to_traditional() {
        let e = Entry {
            simplified: String::new(),
            traditional: "好".to_string(),
            pinyin: Vec::new(),
            definitions: Vec::new(),
        };
        assert_eq!(identity_key(&e), "好__");
    }

    #[tokio::test]
    async fn test_add_then_list_round_trip() {
        let store = FavoritesStore::new(MemoryMedium::new());
        let e = entry("你好", &["ni3 hao3"], &["hello"]);

        store.add(&e).await.expect("add");
        let records = store.list().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key, identity_key(&e));
        assert_eq!(records[0].pinyin, vec!["ni3 hao3"]);
    }

    #[tokio::test]
    async fn test_duplicate_add_is_a_noop() {
        let store = FavoritesStore::new(MemoryMedium::new());
        let e = entry("你好", &["ni3 hao3"], &["hello"]);

        store.add(&e).await.expect("add");
        let records = store.add(&e).await.expect("re-add");
        assert_eq!(records.len(), 1);
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_add_inserts_most_recent_first() {
        let store = FavoritesStore::new(MemoryMedium::new());
        store.add(&entry("好", &["hao3"], &["good"])).await.expect("add");
        store.add(&entry("你好", &["ni3 hao3"], &["hello"])).await.expect("add");

        let records = store.list().await;
        assert_eq!(records[0].simplified, "你好");
        assert_eq!(records[1].simplified, "好");
    }

    #[tokio::test]
    async fn test_remove_by_key() {
        let store = FavoritesStore::new(MemoryMedium::new());
        let e = entry("你好", &["ni3 hao3"], &["hello"]);
        store.add(&e).await.expect("add");
        store.add(&entry("好", &["hao3"], &["good"])).await.expect("add");

        let records = store.remove(&identity_key(&e)).await.expect("remove");
        assert_eq!(records.len(), 1);
        assert!(!store.list().await.iter().any(|r| r.key == identity_key(&e)));
    }

    #[tokio::test]
    async fn test_remove_unknown_key_is_harmless() {
        let store = FavoritesStore::new(MemoryMedium::new());
        store.add(&entry("好", &["hao3"], &["good"])).await.expect("add");
        let records = store.remove("nope__").await.expect("remove");
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_empties_the_set() {
        let store = FavoritesStore::new(MemoryMedium::new());
        store.add(&entry("好", &["hao3"], &["good"])).await.expect("add");
        store.clear().await.expect("clear");
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_blob_lists_as_empty() {
        let store = FavoritesStore::new(MemoryMedium::with_blob("{not json"));
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_over_corrupt_blob_starts_fresh() {
        let store = FavoritesStore::new(MemoryMedium::with_blob("[[["));
        let records = store.add(&entry("好", &["hao3"], &["good"])).await.expect("add");
        assert_eq!(records.len(), 1);
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_normalize_to_one_empty_string() {
        let store = FavoritesStore::new(MemoryMedium::new());
        let e = Entry {
            simplified: "好".to_string(),
            traditional: String::new(),
            pinyin: Vec::new(),
            definitions: Vec::new(),
        };
        let records = store.add(&e).await.expect("add");
        assert_eq!(records[0].pinyin, vec![String::new()]);
        assert_eq!(records[0].definitions, vec![String::new()]);
    }

    #[tokio::test]
    async fn test_json_file_medium_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("favorites.json");

        let e = entry("你好", &["ni3 hao3"], &["hello"]);
        {
            let store = FavoritesStore::new(JsonFileMedium::new(&path));
            store.add(&e).await.expect("add");
        }

        let store = FavoritesStore::new(JsonFileMedium::new(&path));
        let records = store.list().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key, identity_key(&e));
    }

    #[tokio::test]
    async fn test_json_file_medium_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FavoritesStore::new(JsonFileMedium::new(dir.path().join("none.json")));
        assert!(store.list().await.is_empty());
    }
}
