//! Domain Adapters
//!
//! This module provides adapter implementations for domain ports,
//! connecting domain interfaces to the snapshot store.
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_store::adapters::SnapshotQuoteRecordAdapter;
//! use domain_records::QuoteRecordPort;
//!
//! let adapter = SnapshotQuoteRecordAdapter::new(repository);
//! let records = adapter.list().await?;
//! ```

pub mod quote_record;

pub use quote_record::SnapshotQuoteRecordAdapter;
