//! Core Kernel - Foundational types and utilities for the quoting system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money amounts with precise decimal arithmetic in a single currency unit
//! - An injectable clock for every wall-clock read
//! - Quote identifiers and their generators
//! - Port abstractions shared by repository adapters

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::Money;
pub use temporal::{add_days, Clock, SystemClock, FixedClock};
pub use identifiers::{QuoteId, QuoteIdGenerator, RandomQuoteIdGenerator, SequentialQuoteIdGenerator};
pub use error::CoreError;
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
