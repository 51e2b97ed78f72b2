//! Property-Based Test Generators
//!
//! Proptest strategies for quote requests that pass validation on the fixed
//! quoting day.

use proptest::prelude::*;

use domain_rating::{
    CarOwnership, CoverageLevel, DrivingFrequency, HomeOwnership, MaritalStatus, QuoteRequest,
    VehicleCategory, VehicleValue,
};

use crate::fixtures::QUOTE_YEAR;

/// Picks any option from an enum's full option list
fn option_strategy<T: Copy + std::fmt::Debug + 'static>(all: &'static [T]) -> impl Strategy<Value = T> {
    proptest::sample::select(all)
}

pub fn vehicle_category_strategy() -> impl Strategy<Value = VehicleCategory> {
    option_strategy(VehicleCategory::ALL)
}

pub fn coverage_level_strategy() -> impl Strategy<Value = CoverageLevel> {
    option_strategy(CoverageLevel::ALL)
}

pub fn marital_status_strategy() -> impl Strategy<Value = MaritalStatus> {
    option_strategy(MaritalStatus::ALL)
}

pub fn home_ownership_strategy() -> impl Strategy<Value = HomeOwnership> {
    option_strategy(HomeOwnership::ALL)
}

pub fn car_ownership_strategy() -> impl Strategy<Value = CarOwnership> {
    option_strategy(CarOwnership::ALL)
}

pub fn vehicle_value_strategy() -> impl Strategy<Value = VehicleValue> {
    option_strategy(VehicleValue::ALL)
}

pub fn driving_frequency_strategy() -> impl Strategy<Value = DrivingFrequency> {
    option_strategy(DrivingFrequency::ALL)
}

/// Strategy for five-digit ZIP codes, leading zeros included
pub fn zip_code_strategy() -> impl Strategy<Value = String> {
    (0u32..100_000u32).prop_map(|n| format!("{:05}", n))
}

/// Strategy for insurable driver ages (16 to 120)
pub fn driver_age_strategy() -> impl Strategy<Value = u32> {
    16u32..=120u32
}

/// Strategy for accepted model years on the quoting day
pub fn vehicle_year_strategy() -> impl Strategy<Value = i32> {
    (QUOTE_YEAR - 20)..=(QUOTE_YEAR + 1)
}

/// Strategy for requests that pass validation on the quoting day
pub fn quote_request_strategy() -> impl Strategy<Value = QuoteRequest> {
    (
        (
            vehicle_category_strategy(),
            vehicle_year_strategy(),
            coverage_level_strategy(),
            marital_status_strategy(),
            driver_age_strategy(),
        ),
        (
            home_ownership_strategy(),
            car_ownership_strategy(),
            vehicle_value_strategy(),
            driving_frequency_strategy(),
            zip_code_strategy(),
        ),
    )
        .prop_map(
            |(
                (vehicle_category, vehicle_year, coverage_level, marital_status, age),
                (home_ownership, car_ownership, vehicle_value, driving_frequency, zip_code),
            )| QuoteRequest {
                vehicle_category,
                vehicle_year,
                coverage_level,
                marital_status,
                age,
                home_ownership,
                car_ownership,
                vehicle_value,
                driving_frequency,
                zip_code,
            },
        )
}
