//! Store Test Utilities
//!
//! Temporary snapshot stores for repository and API tests. Each store lives
//! in its own temp directory, removed when the value is dropped.

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use domain_records::QuoteRecordPort;
use infra_store::{QuoteRecordRepository, SnapshotQuoteRecordAdapter};

/// File name of the snapshot inside the temp directory
pub const SNAPSHOT_FILE: &str = "quotes.json";

/// A temp directory holding one quote snapshot
pub struct TempStore {
    dir: TempDir,
}

impl TempStore {
    /// Creates an empty temp directory; no snapshot exists yet
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Path the snapshot is written to
    pub fn path(&self) -> PathBuf {
        self.dir.path().join(SNAPSHOT_FILE)
    }

    /// Repository that seeds the mock records on first use
    pub fn seeded_repository(&self) -> QuoteRecordRepository {
        QuoteRecordRepository::new(self.path())
    }

    /// Repository whose fresh store starts empty
    pub fn empty_repository(&self) -> QuoteRecordRepository {
        QuoteRecordRepository::unseeded(self.path())
    }

    /// Port over an empty store
    pub fn empty_port(&self) -> Arc<dyn QuoteRecordPort> {
        Arc::new(SnapshotQuoteRecordAdapter::new(self.empty_repository()))
    }

    /// Port over a seeded store
    pub fn seeded_port(&self) -> Arc<dyn QuoteRecordPort> {
        Arc::new(SnapshotQuoteRecordAdapter::new(self.seeded_repository()))
    }

    /// Reads the raw snapshot from disk
    pub fn read_snapshot(&self) -> serde_json::Value {
        let bytes = std::fs::read(self.path()).expect("Failed to read snapshot");
        serde_json::from_slice(&bytes).expect("Snapshot is not valid JSON")
    }

    /// Writes raw bytes over the snapshot
    pub fn write_raw(&self, contents: &str) {
        std::fs::write(self.path(), contents).expect("Failed to write snapshot");
    }
}

impl Default for TempStore {
    fn default() -> Self {
        Self::new()
    }
}
