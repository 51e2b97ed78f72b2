//! Vehicle Rating Domain
//!
//! This crate prices vehicle insurance quotes. It is pure: no I/O, and every
//! wall-clock read and random draw goes through an injected collaborator.
//!
//! # Architecture
//!
//! - **Factor Library**: age, location, marital, vehicle and driving multipliers
//! - **Coverage Lines**: per-tier limits and line premiums
//! - **Discounts**: independent flat-dollar rules
//! - **Pricing Engine**: composes the above into a [`Quote`]
//! - **Validation**: raw labels and numbers to a typed [`QuoteRequest`]
//! - **Catalog**: option lists and explanations for front ends
//!
//! # Pricing Pipeline
//!
//! ```text
//! RawQuoteRequest -> QuoteRequestValidator -> QuoteRequest -> PricingEngine -> Quote
//!
//! base     = Σ coverage line premiums
//! subtotal = base × age × location × marital × vehicle × driving
//! final    = max(50, subtotal − Σ discounts)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{PricingEngine, QuoteRequestValidator};
//!
//! let request = QuoteRequestValidator::validate(&raw, clock.today())?;
//! let quote = PricingEngine::new().price(&request);
//! println!("{} expires {}", quote.final_premium, quote.expiration_date);
//! ```

pub mod request;
pub mod factors;
pub mod coverage;
pub mod discount;
pub mod quote;
pub mod engine;
pub mod validation;
pub mod catalog;
pub mod error;

pub use request::{
    CarOwnership, CoverageLevel, DrivingFrequency, HomeOwnership, MaritalStatus, QuoteRequest,
    RawQuoteRequest, VehicleCategory, VehicleValue,
};
pub use factors::{RatingFactor, RatingFactors, NEUTRAL_FACTOR};
pub use coverage::{CoverageLine, CoverageLimits, CoverageType};
pub use discount::{Discount, DiscountRule};
pub use quote::{Quote, MINIMUM_PREMIUM};
pub use engine::PricingEngine;
pub use validation::{QuoteRequestValidator, ValidatedRequest, ValidationResult};
pub use error::RatingError;
