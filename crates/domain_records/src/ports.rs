//! Quote Record Ports
//!
//! This module defines the port interface for quote record storage, so the
//! back-office service and HTTP layer never touch the backing store directly.
//!
//! # Architecture
//!
//! The `QuoteRecordPort` trait defines every operation the back office needs
//! from its record store. Adapters implement it:
//!
//! - **Snapshot Adapter**: JSON file rewritten atomically on each change (infra_store)
//! - **Mock Adapter**: In-memory, for testing without a filesystem
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_records::ports::QuoteRecordPort;
//! use std::sync::Arc;
//!
//! pub struct RecordService {
//!     records: Arc<dyn QuoteRecordPort>,
//! }
//!
//! impl RecordService {
//!     pub async fn get(&self, id: &str) -> Result<QuoteRecord, PortError> {
//!         self.records.get(id).await
//!     }
//! }
//! ```
//!
//! # Consistency
//!
//! Every implementation must make each operation atomic with respect to the
//! whole collection: a read never observes half of a concurrent write, and two
//! concurrent writers never lose each other's changes.

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError};

use crate::record::{QuoteRecord, QuoteRecordPatch};

/// Entity name used in `PortError::NotFound`
pub const QUOTE_RECORD_ENTITY: &str = "QuoteRecord";

/// The port trait for quote record storage
///
/// All methods are async and return `Result<T, PortError>` for consistent
/// error handling across adapters.
#[async_trait]
pub trait QuoteRecordPort: DomainPort + HealthCheckable {
    /// Returns every record in stored order
    async fn list(&self) -> Result<Vec<QuoteRecord>, PortError>;

    /// Retrieves a record by id
    ///
    /// # Returns
    ///
    /// The record if found, or `PortError::NotFound`
    async fn get(&self, id: &str) -> Result<QuoteRecord, PortError>;

    /// Merges a patch into a record, creating it if absent
    ///
    /// # Arguments
    ///
    /// * `id` - The record identifier
    /// * `patch` - Fields to overwrite; unsupplied fields are kept
    ///
    /// # Returns
    ///
    /// The record as stored after the merge
    async fn upsert(&self, id: &str, patch: QuoteRecordPatch) -> Result<QuoteRecord, PortError>;

    /// Merges a patch into an existing record
    ///
    /// # Returns
    ///
    /// The updated record, or `PortError::NotFound` if no record has this id
    async fn update(&self, id: &str, patch: QuoteRecordPatch) -> Result<QuoteRecord, PortError>;

    /// Removes a record
    ///
    /// # Returns
    ///
    /// The removed record, or `PortError::NotFound`
    async fn delete(&self, id: &str) -> Result<QuoteRecord, PortError>;
}

/// Mock implementation of QuoteRecordPort for testing
///
/// This adapter keeps records in memory and is useful for unit testing
/// without touching the filesystem.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};

    /// In-memory mock implementation of QuoteRecordPort
    #[derive(Debug, Default, Clone)]
    pub struct MockQuoteRecordPort {
        records: Arc<RwLock<Vec<QuoteRecord>>>,
    }

    impl MockQuoteRecordPort {
        /// Creates an empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with records for testing
        pub fn with_records(records: Vec<QuoteRecord>) -> Self {
            Self {
                records: Arc::new(RwLock::new(records)),
            }
        }
    }

    impl DomainPort for MockQuoteRecordPort {}

    #[async_trait]
    impl HealthCheckable for MockQuoteRecordPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-quote-record-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl QuoteRecordPort for MockQuoteRecordPort {
        async fn list(&self) -> Result<Vec<QuoteRecord>, PortError> {
            Ok(self.records.read().await.clone())
        }

        async fn get(&self, id: &str) -> Result<QuoteRecord, PortError> {
            self.records
                .read()
                .await
                .iter()
                .find(|record| record.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found(QUOTE_RECORD_ENTITY, id))
        }

        async fn upsert(&self, id: &str, patch: QuoteRecordPatch) -> Result<QuoteRecord, PortError> {
            let mut records = self.records.write().await;
            match records.iter_mut().find(|record| record.id == id) {
                Some(record) => {
                    record.apply(patch);
                    Ok(record.clone())
                }
                None => {
                    let record = QuoteRecord::from_patch(id, patch);
                    records.push(record.clone());
                    Ok(record)
                }
            }
        }

        async fn update(&self, id: &str, patch: QuoteRecordPatch) -> Result<QuoteRecord, PortError> {
            let mut records = self.records.write().await;
            let record = records
                .iter_mut()
                .find(|record| record.id == id)
                .ok_or_else(|| PortError::not_found(QUOTE_RECORD_ENTITY, id))?;
            record.apply(patch);
            Ok(record.clone())
        }

        async fn delete(&self, id: &str) -> Result<QuoteRecord, PortError> {
            let mut records = self.records.write().await;
            let index = records
                .iter()
                .position(|record| record.id == id)
                .ok_or_else(|| PortError::not_found(QUOTE_RECORD_ENTITY, id))?;
            Ok(records.remove(index))
        }
    }
}
