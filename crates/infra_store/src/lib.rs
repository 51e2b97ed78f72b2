//! Infrastructure Store Layer
//!
//! This crate persists back-office quote records as a JSON snapshot file and
//! implements the `QuoteRecordPort` over it.
//!
//! # Architecture
//!
//! ```text
//! SnapshotQuoteRecordAdapter   (QuoteRecordPort, PortError)
//!         │
//! QuoteRecordRepository        (collection lock, seeding, StoreError)
//!         │
//! JsonSnapshotStore            (atomic whole-file writes)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{QuoteRecordRepository, SnapshotQuoteRecordAdapter};
//!
//! let repo = QuoteRecordRepository::new("data/quotes.json");
//! let port = Arc::new(SnapshotQuoteRecordAdapter::new(repo));
//! ```

pub mod error;
pub mod snapshot;
pub mod seed;
pub mod repositories;
pub mod adapters;

pub use error::StoreError;
pub use snapshot::JsonSnapshotStore;
pub use seed::mock_records;
pub use repositories::QuoteRecordRepository;
pub use adapters::SnapshotQuoteRecordAdapter;
