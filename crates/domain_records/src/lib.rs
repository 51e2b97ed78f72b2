//! Back-office Quote Records Domain
//!
//! This crate manages the persisted quote records a small back-office tool
//! reads and edits: customer contact details, what was quoted, and follow-up
//! status.
//!
//! # Records vs Quotes
//!
//! A priced `Quote` (see `domain_rating`) is an immutable value. A
//! [`QuoteRecord`] is a mutable entity keyed by a stable id, with every other
//! field optional and updated by merging a [`QuoteRecordPatch`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use domain_records::{RecordService, QuoteRecordPatch};
//!
//! let service = RecordService::new(port);
//! service.save("Q2000", QuoteRecordPatch::new().customer("Ada Byron")).await?;
//! service.mark_contacted("Q2000").await?;
//! ```

pub mod record;
pub mod ports;
pub mod services;
pub mod error;

pub use record::{QuoteRecord, QuoteRecordPatch, STATUS_CONTACTED, STATUS_NEW};
pub use ports::{QuoteRecordPort, QUOTE_RECORD_ENTITY};
pub use services::{record_patch_from_quote, QuoteSummary, RecordService};
pub use error::RecordError;
