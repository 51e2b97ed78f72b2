//! JSON snapshot file
//!
//! The whole collection lives in one file holding a JSON array of flat
//! objects. Every write replaces the file wholesale: the new snapshot is
//! written to a sibling temp file, flushed, then renamed over the old one, so
//! a crash mid-write leaves either the old or the new snapshot, never a mix.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::StoreError;

/// Suffix appended to the snapshot path for in-flight writes
const TEMP_SUFFIX: &str = "tmp";

/// A JSON array persisted in a single file
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Creates a store over `path`; nothing is touched until first use
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(TEMP_SUFFIX);
        self.path.with_file_name(name)
    }

    /// Returns true if a snapshot has been written
    pub async fn exists(&self) -> Result<bool, StoreError> {
        fs::try_exists(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))
    }

    /// Reads the snapshot
    ///
    /// # Returns
    ///
    /// `None` if no snapshot exists yet, otherwise every stored item in order
    pub async fn load<T: DeserializeOwned>(&self) -> Result<Option<Vec<T>>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let items: Vec<T> = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), count = items.len(), "Loaded snapshot");
        Ok(Some(items))
    }

    /// Replaces the snapshot with `items`
    ///
    /// Creates the parent directory if needed.
    pub async fn persist<T: Serialize>(&self, items: &[T]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let bytes = serde_json::to_vec_pretty(items)?;
        let temp_path = self.temp_path();

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| StoreError::io(&temp_path, e))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| StoreError::io(&temp_path, e))?;
        file.sync_all()
            .await
            .map_err(|e| StoreError::io(&temp_path, e))?;
        drop(file);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), count = items.len(), "Persisted snapshot");
        Ok(())
    }
}
