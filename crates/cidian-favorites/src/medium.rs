use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::FavoritesError;

/// One key-value slot holding the whole serialized favorites list.
#[async_trait]
pub trait FavoritesMedium: Send + Sync {
    /// The stored blob, or None if nothing was ever written.
    async fn read(&self) -> Result<Option<String>, FavoritesError>;

    async fn write(&self, blob: &str) -> Result<(), FavoritesError>;
}

/// JSON file on disk, written via a temp file and rename.
pub struct JsonFileMedium {
    path: PathBuf,
}

impl JsonFileMedium {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FavoritesMedium for JsonFileMedium {
    async fn read(&self) -> Result<Option<String>, FavoritesError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FavoritesError::Read(e)),
        }
    }

    async fn write(&self, blob: &str) -> Result<(), FavoritesError> {
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, blob).await.map_err(FavoritesError::Write)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(FavoritesError::Write)?;
        Ok(())
    }
}

/// In-memory slot for tests.
#[derive(Default)]
pub struct MemoryMedium {
    slot: Mutex<Option<String>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: &str) -> Self {
        Self { slot: Mutex::new(Some(blob.to_string())) }
    }
}

#[async_trait]
impl FavoritesMedium for MemoryMedium {
    async fn read(&self) -> Result<Option<String>, FavoritesError> {
        Ok(self.slot.lock().await.clone())
    }

    async fn write(&self, blob: &str) -> Result<(), FavoritesError> {
        *self.slot.lock().await = Some(blob.to_string());
        Ok(())
    }
}
