//! Snapshot Quote Record Adapter
//!
//! Implements `QuoteRecordPort` over the [`QuoteRecordRepository`],
//! translating store errors into port errors:
//!
//! - `StoreError::NotFound` -> `PortError::NotFound`
//! - `StoreError::Io` / `StoreError::Serialization` -> `PortError::Storage`

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_records::{QuoteRecord, QuoteRecordPatch, QuoteRecordPort};

use crate::repositories::QuoteRecordRepository;

const ADAPTER_ID: &str = "snapshot-quote-record-adapter";

/// Snapshot-file implementation of the QuoteRecordPort trait
#[derive(Debug, Clone)]
pub struct SnapshotQuoteRecordAdapter {
    repository: QuoteRecordRepository,
}

impl SnapshotQuoteRecordAdapter {
    /// Creates an adapter over a repository
    pub fn new(repository: QuoteRecordRepository) -> Self {
        Self { repository }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &QuoteRecordRepository {
        &self.repository
    }
}

impl DomainPort for SnapshotQuoteRecordAdapter {}

#[async_trait]
impl HealthCheckable for SnapshotQuoteRecordAdapter {
    /// Checks that the snapshot can be read and parsed
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let result = self.repository.list().await;
        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match result {
            Ok(records) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Healthy,
                latency_ms,
                message: Some(format!("{} records", records.len())),
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(format!("Store error: {}", e)),
                checked_at: Utc::now(),
            },
        }
    }
}

#[async_trait]
impl QuoteRecordPort for SnapshotQuoteRecordAdapter {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<QuoteRecord>, PortError> {
        Ok(self.repository.list().await?)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> Result<QuoteRecord, PortError> {
        Ok(self.repository.get(id).await?)
    }

    #[instrument(skip(self, patch))]
    async fn upsert(&self, id: &str, patch: QuoteRecordPatch) -> Result<QuoteRecord, PortError> {
        Ok(self.repository.upsert(id, patch).await?)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &str, patch: QuoteRecordPatch) -> Result<QuoteRecord, PortError> {
        Ok(self.repository.update(id, patch).await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<QuoteRecord, PortError> {
        Ok(self.repository.delete(id).await?)
    }
}
