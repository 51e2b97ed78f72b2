//! Store error types
//!
//! Errors raised while reading or writing the quote record snapshot. I/O
//! failures are fatal to the operation that hit them; nothing is retried.

use std::path::{Path, PathBuf};

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file could not be read, written or renamed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not a valid JSON array of records
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Entity not found in the store
    #[error("{entity} with id '{id}' not found")]
    NotFound {
        entity: &'static str,
        id: String,
    },
}

impl StoreError {
    /// Creates an I/O error tagged with the path it concerns
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a not found error for a specific entity type and identifier
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_store::StoreError;
    ///
    /// let error = StoreError::not_found("QuoteRecord", "Q1001");
    /// assert!(error.to_string().contains("Q1001"));
    /// ```
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Translates store errors into the port error every adapter returns
impl From<StoreError> for PortError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { entity, id } => PortError::not_found(entity, id),
            other => {
                let message = match &other {
                    StoreError::Io { path, .. } => {
                        format!("Failed to access quote store at {}", path.display())
                    }
                    _ => "Quote store is corrupt".to_string(),
                };
                PortError::storage(message, other)
            }
        }
    }
}
