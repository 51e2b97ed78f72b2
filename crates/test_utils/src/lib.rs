//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! quoting system test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built requests, clocks and engines pinned to a fixed day
//! - `builders`: Builder patterns for quote requests and records
//! - `store`: Temporary snapshot stores for repository tests
//! - `assertions`: Custom assertion helpers for priced quotes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod store;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use store::*;
pub use assertions::*;
pub use generators::*;
