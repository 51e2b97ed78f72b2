//! Record domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the back-office record domain
#[derive(Debug, Error)]
pub enum RecordError {
    /// No record has the given id
    #[error("Quote record not found: {0}")]
    NotFound(String),

    /// The record store failed
    #[error("Record storage failed: {0}")]
    Storage(String),
}

impl RecordError {
    /// Creates a NotFound error from any id type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        RecordError::NotFound(id.to_string())
    }

    /// Returns true if no record has the requested id
    pub fn is_not_found(&self) -> bool {
        matches!(self, RecordError::NotFound(_))
    }
}

impl From<PortError> for RecordError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::NotFound { id, .. } => RecordError::NotFound(id),
            other => RecordError::Storage(other.to_string()),
        }
    }
}
