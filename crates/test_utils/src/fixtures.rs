//! Pre-built Test Fixtures
//!
//! Ready-to-use test data pinned to a single quoting day, 2026-10-16, so that
//! vehicle ages, quote ids and expiration dates are predictable.

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::{Clock, FixedClock, SequentialQuoteIdGenerator};
use domain_rating::{
    CarOwnership, CoverageLevel, DrivingFrequency, HomeOwnership, MaritalStatus, PricingEngine,
    QuoteRequest, RawQuoteRequest, VehicleCategory, VehicleValue,
};
use domain_records::{QuoteRecord, QuoteRecordPatch};

/// Year of the fixed quoting day
pub const QUOTE_YEAR: i32 = 2026;

/// Fixture for temporal test data
pub struct ClockFixtures;

impl ClockFixtures {
    /// Clock frozen at noon UTC on the quoting day
    pub fn quote_day() -> FixedClock {
        FixedClock::on(QUOTE_YEAR, 10, 16).expect("valid fixture date")
    }

    /// The quoting day as a calendar date
    pub fn quote_date() -> NaiveDate {
        Self::quote_day().today()
    }

    /// The day a quote priced on the quoting day expires
    pub fn expiration_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(QUOTE_YEAR, 11, 15).expect("valid fixture date")
    }
}

/// Fixture for quote requests
pub struct RequestFixtures;

impl RequestFixtures {
    /// The sample request: a three-year-old mid-value Standard vehicle,
    /// married 35-year-old homeowner financing the car, ZIP 90210
    ///
    /// Prices to a final premium of $1,254.32 on the quoting day.
    pub fn sample() -> QuoteRequest {
        QuoteRequest {
            vehicle_category: VehicleCategory::Standard,
            vehicle_year: QUOTE_YEAR - 3,
            coverage_level: CoverageLevel::Standard,
            marital_status: MaritalStatus::Married,
            age: 35,
            home_ownership: HomeOwnership::Own,
            car_ownership: CarOwnership::Finance,
            vehicle_value: VehicleValue::Medium,
            driving_frequency: DrivingFrequency::Medium,
            zip_code: "90210".to_string(),
        }
    }

    /// A request that triggers all six discounts
    pub fn every_discount() -> QuoteRequest {
        QuoteRequest {
            coverage_level: CoverageLevel::Premium,
            car_ownership: CarOwnership::Own,
            vehicle_year: QUOTE_YEAR - 1,
            age: 40,
            ..Self::sample()
        }
    }

    /// A cheap request in a low-rated ZIP whose discounts exceed its subtotal
    pub fn below_minimum() -> QuoteRequest {
        QuoteRequest {
            zip_code: "98101".to_string(),
            vehicle_category: VehicleCategory::Economy,
            vehicle_year: QUOTE_YEAR - 20,
            coverage_level: CoverageLevel::Basic,
            car_ownership: CarOwnership::Own,
            vehicle_value: VehicleValue::Low,
            driving_frequency: DrivingFrequency::Low,
            ..Self::sample()
        }
    }

    /// A teenage single renter with no discounts
    pub fn young_driver() -> QuoteRequest {
        QuoteRequest {
            vehicle_category: VehicleCategory::Luxury,
            vehicle_year: QUOTE_YEAR - 10,
            coverage_level: CoverageLevel::Premium,
            marital_status: MaritalStatus::Single,
            age: 18,
            home_ownership: HomeOwnership::Rent,
            car_ownership: CarOwnership::Lease,
            vehicle_value: VehicleValue::High,
            driving_frequency: DrivingFrequency::High,
            zip_code: "10001".to_string(),
        }
    }

    /// The sample request in its untyped wire form
    pub fn raw_sample() -> RawQuoteRequest {
        RawQuoteRequest::from(&Self::sample())
    }
}

/// Fixture for pricing engines
pub struct EngineFixtures;

impl EngineFixtures {
    /// Engine pinned to the quoting day, minting ids from QM-20261016-1000 up
    pub fn fixed() -> PricingEngine {
        PricingEngine::new()
            .with_clock(Arc::new(ClockFixtures::quote_day()))
            .with_id_generator(Arc::new(SequentialQuoteIdGenerator::default()))
    }
}

/// Fixture for back-office records
pub struct RecordFixtures;

impl RecordFixtures {
    /// A record with every field populated
    pub fn full(id: &str) -> QuoteRecord {
        QuoteRecord::from_patch(id, Self::full_patch())
    }

    /// A patch supplying every field
    pub fn full_patch() -> QuoteRecordPatch {
        QuoteRecordPatch::new()
            .customer("Ada Byron")
            .email("ada@example.com")
            .phone("(555) 010-1815")
            .date("2026-10-16")
            .vehicle("2023 Standard")
            .coverage("Standard")
            .premium("$834.74")
            .status("new")
            .zip("90210")
    }
}
