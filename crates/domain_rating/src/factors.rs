//! Rating factor library
//!
//! Pure lookup and formula functions that map one request attribute to a
//! dimensionless multiplier. Every function is total over its input type.
//!
//! | Factor | Input | Range |
//! |---|---|---|
//! | age | driver age | 1.0 – 2.0 |
//! | location | ZIP code | 0.8 – 1.493 |
//! | marital | marital status | 0.9 – 1.1 |
//! | vehicle | category × model year × value × ownership | product of four terms |
//! | driving | driving frequency | 0.8 – 1.2 |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use md5::{Digest, Md5};
use std::str::FromStr;

use crate::request::{
    CarOwnership, DrivingFrequency, MaritalStatus, QuoteRequest, VehicleCategory, VehicleValue,
};

/// Multiplier applied when an attribute has no effect on price
pub const NEUTRAL_FACTOR: Decimal = dec!(1.0);

/// Floor of the vehicle model-year term
pub const MIN_VEHICLE_YEAR_FACTOR: Decimal = dec!(0.8);

/// An option whose value maps directly to a multiplier
pub trait RatingFactor: FromStr + Sized {
    /// Returns the multiplier for this option
    fn factor(&self) -> Decimal;

    /// Returns the multiplier for a wire label
    ///
    /// Unknown labels price at [`NEUTRAL_FACTOR`] rather than failing; callers
    /// that need to reject them validate first.
    fn factor_for_label(label: &str) -> Decimal {
        match label.parse::<Self>() {
            Ok(option) => option.factor(),
            Err(_) => NEUTRAL_FACTOR,
        }
    }
}

impl RatingFactor for MaritalStatus {
    fn factor(&self) -> Decimal {
        match self {
            MaritalStatus::Single => dec!(1.1),
            MaritalStatus::Married => dec!(0.9),
            MaritalStatus::Divorced => dec!(1.0),
            MaritalStatus::Widowed => dec!(0.95),
        }
    }
}

impl RatingFactor for DrivingFrequency {
    fn factor(&self) -> Decimal {
        match self {
            DrivingFrequency::Low => dec!(0.8),
            DrivingFrequency::Medium => dec!(1.0),
            DrivingFrequency::High => dec!(1.2),
        }
    }
}

impl RatingFactor for VehicleCategory {
    fn factor(&self) -> Decimal {
        match self {
            VehicleCategory::Economy => dec!(0.9),
            VehicleCategory::Standard => dec!(1.0),
            VehicleCategory::Luxury => dec!(1.3),
        }
    }
}

/// Replacement-cost term of the vehicle factor
///
/// Coverage pricing scales physical damage lines by a different table, see
/// [`crate::coverage::coverage_value_multiplier`].
impl RatingFactor for VehicleValue {
    fn factor(&self) -> Decimal {
        match self {
            VehicleValue::Low => dec!(0.8),
            VehicleValue::Medium => dec!(1.0),
            VehicleValue::High => dec!(1.3),
        }
    }
}

impl RatingFactor for CarOwnership {
    fn factor(&self) -> Decimal {
        match self {
            CarOwnership::Own => dec!(0.95),
            CarOwnership::Finance => dec!(1.0),
            CarOwnership::Lease => dec!(1.05),
        }
    }
}

/// Driver age factor
///
/// Step function: under 20 → 2.0, 20–24 → 1.5, 25–29 → 1.2, 30–59 → 1.0,
/// 60–69 → 1.1, 70 and over → 1.3.
pub fn age_factor(age: u32) -> Decimal {
    match age {
        0..=19 => dec!(2.0),
        20..=24 => dec!(1.5),
        25..=29 => dec!(1.2),
        30..=59 => dec!(1.0),
        60..=69 => dec!(1.1),
        _ => dec!(1.3),
    }
}

/// Stable 0–99 bucket for a ZIP code
///
/// The MD5 digest of the ZIP string, read as one big-endian unsigned
/// integer, reduced modulo 100. The value is shown to customers, so the
/// mapping must never change.
pub fn location_bucket(zip_code: &str) -> u32 {
    Md5::digest(zip_code.as_bytes())
        .iter()
        .fold(0u32, |acc, byte| (acc * 256 + u32::from(*byte)) % 100)
}

/// Location factor in `[0.8, 1.5)`: `0.8 + (bucket / 100) × 0.7`
pub fn location_factor(zip_code: &str) -> Decimal {
    dec!(0.8) + Decimal::from(location_bucket(zip_code)) / dec!(100) * dec!(0.7)
}

/// Marital status factor
pub fn marital_factor(status: MaritalStatus) -> Decimal {
    status.factor()
}

/// Driving frequency factor
pub fn driving_factor(frequency: DrivingFrequency) -> Decimal {
    frequency.factor()
}

/// Model-year term of the vehicle factor
///
/// Newer vehicles cost more: `1.2 − 0.03 × age`, floored at 0.8. Next
/// year's models (negative age) land slightly above 1.2.
pub fn vehicle_year_factor(vehicle_year: i32, current_year: i32) -> Decimal {
    let vehicle_age = Decimal::from(current_year - vehicle_year);
    (dec!(1.2) - vehicle_age * dec!(0.03)).max(MIN_VEHICLE_YEAR_FACTOR)
}

/// Combined vehicle factor: category × model year × value × ownership
pub fn vehicle_factor(
    category: VehicleCategory,
    vehicle_year: i32,
    value: VehicleValue,
    ownership: CarOwnership,
    current_year: i32,
) -> Decimal {
    category.factor()
        * vehicle_year_factor(vehicle_year, current_year)
        * value.factor()
        * ownership.factor()
}

/// The five adjustment factors applied to a base premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingFactors {
    #[serde(with = "rust_decimal::serde::float")]
    pub age_factor: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub location_factor: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub marital_factor: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub vehicle_factor: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub driving_factor: Decimal,
}

impl RatingFactors {
    /// Computes every factor for a request at full precision
    pub fn for_request(request: &QuoteRequest, current_year: i32) -> Self {
        Self {
            age_factor: age_factor(request.age),
            location_factor: location_factor(&request.zip_code),
            marital_factor: marital_factor(request.marital_status),
            vehicle_factor: vehicle_factor(
                request.vehicle_category,
                request.vehicle_year,
                request.vehicle_value,
                request.car_ownership,
                current_year,
            ),
            driving_factor: driving_factor(request.driving_frequency),
        }
    }

    /// Product of all five factors
    pub fn product(&self) -> Decimal {
        self.age_factor
            * self.location_factor
            * self.marital_factor
            * self.vehicle_factor
            * self.driving_factor
    }

    /// Copy with every factor rounded to two decimals, for display
    pub fn rounded(&self) -> Self {
        Self {
            age_factor: self.age_factor.round_dp(2),
            location_factor: self.location_factor.round_dp(2),
            marital_factor: self.marital_factor.round_dp(2),
            vehicle_factor: self.vehicle_factor.round_dp(2),
            driving_factor: self.driving_factor.round_dp(2),
        }
    }
}
