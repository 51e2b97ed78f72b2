//! Record domain services
//!
//! The back-office operations layered over a [`QuoteRecordPort`]: listing,
//! editing and deleting records, the "email customer" action, and turning a
//! freshly priced quote into a stored record.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use core_kernel::Money;
use crate::error::RecordError;
use crate::ports::QuoteRecordPort;
use crate::record::{QuoteRecord, QuoteRecordPatch, STATUS_CONTACTED, STATUS_NEW};

/// The parts of a priced quote that are kept on its back-office record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSummary {
    pub quoted_on: NaiveDate,
    /// Short vehicle description, e.g. `2023 Standard`
    pub vehicle: String,
    pub coverage: String,
    pub premium: Money,
    pub zip: String,
}

/// Builds the patch stored when a priced quote is saved
///
/// The premium is formatted for display (`$1,254.32`) and the status starts
/// at `new`.
pub fn record_patch_from_quote(summary: &QuoteSummary) -> QuoteRecordPatch {
    QuoteRecordPatch::new()
        .date(summary.quoted_on.format("%Y-%m-%d").to_string())
        .vehicle(summary.vehicle.clone())
        .coverage(summary.coverage.clone())
        .premium(summary.premium.to_string())
        .zip(summary.zip.clone())
        .status(STATUS_NEW)
}

/// Service for back-office record operations
#[derive(Clone)]
pub struct RecordService {
    records: Arc<dyn QuoteRecordPort>,
}

impl RecordService {
    /// Creates a service over a record port
    pub fn new(records: Arc<dyn QuoteRecordPort>) -> Self {
        Self { records }
    }

    /// Returns the underlying port
    pub fn port(&self) -> &Arc<dyn QuoteRecordPort> {
        &self.records
    }

    /// Returns every record in stored order
    pub async fn list(&self) -> Result<Vec<QuoteRecord>, RecordError> {
        Ok(self.records.list().await?)
    }

    /// Retrieves one record
    pub async fn get(&self, id: &str) -> Result<QuoteRecord, RecordError> {
        Ok(self.records.get(id).await?)
    }

    /// Creates or edits a record
    pub async fn save(&self, id: &str, patch: QuoteRecordPatch) -> Result<QuoteRecord, RecordError> {
        let record = self.records.upsert(id, patch).await?;
        info!(record_id = %id, "Saved quote record");
        Ok(record)
    }

    /// Marks a customer as contacted about their quote
    ///
    /// No message is sent; only the record status changes.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` if no record has this id
    pub async fn mark_contacted(&self, id: &str) -> Result<QuoteRecord, RecordError> {
        let record = self
            .records
            .update(id, QuoteRecordPatch::new().status(STATUS_CONTACTED))
            .await?;
        info!(record_id = %id, "Marked quote record as contacted");
        Ok(record)
    }

    /// Removes a record, returning what was removed
    pub async fn delete(&self, id: &str) -> Result<QuoteRecord, RecordError> {
        let record = self.records.delete(id).await?;
        info!(record_id = %id, "Deleted quote record");
        Ok(record)
    }

    /// Stores a priced quote under its quote id
    ///
    /// # Arguments
    ///
    /// * `id` - The quote id, used as the record id
    /// * `summary` - What was quoted
    /// * `contact` - Customer name, email and phone, if the caller supplied them
    pub async fn record_quote(
        &self,
        id: &str,
        summary: &QuoteSummary,
        contact: QuoteRecordPatch,
    ) -> Result<QuoteRecord, RecordError> {
        let mut patch = record_patch_from_quote(summary);
        patch.customer = contact.customer;
        patch.email = contact.email;
        patch.phone = contact.phone;
        self.save(id, patch).await
    }
}
