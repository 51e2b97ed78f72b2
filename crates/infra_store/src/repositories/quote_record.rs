//! Quote record repository implementation
//!
//! This module provides access to the quote record collection stored in a
//! [`JsonSnapshotStore`]. Every operation loads the snapshot, applies its
//! change in memory and persists the whole collection again, all while
//! holding one lock scoped to the collection.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use domain_records::{QuoteRecord, QuoteRecordPatch, QUOTE_RECORD_ENTITY};

use crate::error::StoreError;
use crate::seed::mock_records;
use crate::snapshot::JsonSnapshotStore;

/// Repository for the back-office quote record collection
///
/// Reads take the lock in shared mode; mutations take it exclusively for the
/// whole load-modify-persist cycle, so concurrent writers never lose each
/// other's changes. The lock lives in-process: one process owns the file.
///
/// # Bootstrap
///
/// If no snapshot exists when the repository is first used, the seed records
/// are written before anything is read. This happens at most once.
///
/// # Example
///
/// ```rust,ignore
/// use infra_store::QuoteRecordRepository;
///
/// let repo = QuoteRecordRepository::new("data/quotes.json");
/// let record = repo.get("Q1001").await?;
/// ```
#[derive(Debug, Clone)]
pub struct QuoteRecordRepository {
    store: Arc<RwLock<JsonSnapshotStore>>,
    seed: Arc<Vec<QuoteRecord>>,
}

impl QuoteRecordRepository {
    /// Creates a repository seeded with the mock records
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the snapshot file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_seed(path, mock_records())
    }

    /// Creates a repository that seeds a fresh store with `seed`
    pub fn with_seed(path: impl Into<PathBuf>, seed: Vec<QuoteRecord>) -> Self {
        Self {
            store: Arc::new(RwLock::new(JsonSnapshotStore::new(path))),
            seed: Arc::new(seed),
        }
    }

    /// Creates a repository whose fresh store starts empty
    pub fn unseeded(path: impl Into<PathBuf>) -> Self {
        Self::with_seed(path, Vec::new())
    }

    /// Returns the snapshot file path
    pub async fn path(&self) -> PathBuf {
        self.store.read().await.path().to_path_buf()
    }

    /// Writes the seed if no snapshot exists yet
    ///
    /// Checked under the exclusive lock so racing first callers seed once.
    async fn ensure_seeded(&self) -> Result<(), StoreError> {
        if self.store.read().await.exists().await? {
            return Ok(());
        }

        let store = self.store.write().await;
        if !store.exists().await? {
            store.persist(self.seed.as_slice()).await?;
            info!(path = %store.path().display(), count = self.seed.len(), "Seeded quote store");
        }
        Ok(())
    }

    async fn load(store: &JsonSnapshotStore) -> Result<Vec<QuoteRecord>, StoreError> {
        Ok(store.load().await?.unwrap_or_default())
    }

    /// Retrieves every record in stored order
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<QuoteRecord>, StoreError> {
        self.ensure_seeded().await?;
        let store = self.store.read().await;
        Self::load(&store).await
    }

    /// Retrieves a record by id
    ///
    /// # Returns
    ///
    /// The record, or `StoreError::NotFound`
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<QuoteRecord, StoreError> {
        self.ensure_seeded().await?;
        let store = self.store.read().await;
        Self::load(&store)
            .await?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::not_found(QUOTE_RECORD_ENTITY, id))
    }

    /// Merges a patch into a record, appending a new record if absent
    ///
    /// A new record holds the id and exactly the supplied fields.
    #[instrument(skip(self, patch))]
    pub async fn upsert(&self, id: &str, patch: QuoteRecordPatch) -> Result<QuoteRecord, StoreError> {
        self.ensure_seeded().await?;
        let store = self.store.write().await;
        let mut records = Self::load(&store).await?;

        let record = match records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.apply(patch);
                record.clone()
            }
            None => {
                let record = QuoteRecord::from_patch(id, patch);
                records.push(record.clone());
                debug!("Created quote record");
                record
            }
        };

        store.persist(&records).await?;
        Ok(record)
    }

    /// Merges a patch into an existing record
    ///
    /// # Returns
    ///
    /// The updated record, or `StoreError::NotFound` with the store unchanged
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &str, patch: QuoteRecordPatch) -> Result<QuoteRecord, StoreError> {
        self.ensure_seeded().await?;
        let store = self.store.write().await;
        let mut records = Self::load(&store).await?;

        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::not_found(QUOTE_RECORD_ENTITY, id))?;
        record.apply(patch);
        let updated = record.clone();

        store.persist(&records).await?;
        Ok(updated)
    }

    /// Removes a record, keeping the others in order
    ///
    /// # Returns
    ///
    /// The removed record, or `StoreError::NotFound` with the store unchanged
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<QuoteRecord, StoreError> {
        self.ensure_seeded().await?;
        let store = self.store.write().await;
        let mut records = Self::load(&store).await?;

        let index = records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| StoreError::not_found(QUOTE_RECORD_ENTITY, id))?;
        let removed = records.remove(index);

        store.persist(&records).await?;
        Ok(removed)
    }
}
