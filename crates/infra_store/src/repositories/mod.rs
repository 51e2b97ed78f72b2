//! Repository implementations for persisted entities
//!
//! Repositories hide the snapshot format from the domain layer and return
//! store errors; the adapters translate those into port errors.

pub mod quote_record;

pub use quote_record::QuoteRecordRepository;
