//! Coverage lines and limits
//!
//! A quote itemizes its base premium as a sequence of coverage lines. Basic
//! coverage carries the three liability lines only; Standard and Premium add
//! rental, comprehensive and collision.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use crate::request::{CoverageLevel, VehicleValue};

/// Types of vehicle coverage, in quote order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageType {
    BodilyInjuryLiability,
    PropertyDamageLiability,
    UninsuredMotorist,
    RentalCar,
    Comprehensive,
    Collision,
}

impl CoverageType {
    /// Every coverage type, in quote order
    pub const ALL: [CoverageType; 6] = [
        CoverageType::BodilyInjuryLiability,
        CoverageType::PropertyDamageLiability,
        CoverageType::UninsuredMotorist,
        CoverageType::RentalCar,
        CoverageType::Comprehensive,
        CoverageType::Collision,
    ];

    /// Returns the display name used on quote lines
    pub fn name(&self) -> &'static str {
        match self {
            CoverageType::BodilyInjuryLiability => "Bodily Injury Liability",
            CoverageType::PropertyDamageLiability => "Property Damage Liability",
            CoverageType::UninsuredMotorist => "Uninsured/Underinsured Motorist Bodily Injury",
            CoverageType::RentalCar => "Rental Car Coverage",
            CoverageType::Comprehensive => "Comprehensive",
            CoverageType::Collision => "Collision",
        }
    }

    /// Returns the one-line description printed on quote lines
    pub fn description(&self) -> &'static str {
        match self {
            CoverageType::BodilyInjuryLiability => {
                "Covers costs due to injuries you cause to others in an accident"
            }
            CoverageType::PropertyDamageLiability => {
                "Covers costs due to damage you cause to others' property"
            }
            CoverageType::UninsuredMotorist => {
                "Covers your injuries caused by an uninsured or underinsured driver"
            }
            CoverageType::RentalCar => "Covers rental car costs while your car is being repaired",
            CoverageType::Comprehensive => {
                "Covers damage to your car from non-accident causes like theft, vandalism, etc."
            }
            CoverageType::Collision => "Covers damage to your car from accidents regardless of fault",
        }
    }

    /// Annual premium of this line before any multiplier
    pub fn base_premium(&self) -> Decimal {
        match self {
            CoverageType::BodilyInjuryLiability => dec!(250),
            CoverageType::PropertyDamageLiability => dec!(150),
            CoverageType::UninsuredMotorist => dec!(100),
            CoverageType::RentalCar => dec!(50),
            CoverageType::Comprehensive => dec!(200),
            CoverageType::Collision => dec!(300),
        }
    }
}

impl CoverageLevel {
    /// Multiplier applied to the three liability lines
    pub fn premium_multiplier(&self) -> Decimal {
        match self {
            CoverageLevel::Basic => dec!(1.0),
            CoverageLevel::Standard => dec!(1.3),
            CoverageLevel::Premium => dec!(1.7),
        }
    }

    /// Multiplier applied to rental, comprehensive and collision
    pub fn optional_multiplier(&self) -> Decimal {
        match self {
            CoverageLevel::Premium => dec!(1.2),
            CoverageLevel::Basic | CoverageLevel::Standard => dec!(1.0),
        }
    }
}

/// Vehicle value multiplier used by comprehensive and collision
///
/// Deliberately a separate table from the vehicle value factor: high-value
/// vehicles weigh 1.4 here but 1.3 in the rating factor.
pub fn coverage_value_multiplier(value: VehicleValue) -> Decimal {
    match value {
        VehicleValue::Low => dec!(0.8),
        VehicleValue::Medium => dec!(1.0),
        VehicleValue::High => dec!(1.4),
    }
}

/// Limits and deductibles for one coverage level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageLimits {
    pub bodily_injury: &'static str,
    pub property_damage: &'static str,
    pub uninsured_motorist: &'static str,
    /// `None` when rental coverage is not included
    pub rental: Option<&'static str>,
    /// `None` when comprehensive and collision are not included
    pub deductible: Option<&'static str>,
}

impl CoverageLimits {
    /// Returns the limit text for a coverage type, if offered at this level
    pub fn for_coverage(&self, coverage: CoverageType) -> Option<&'static str> {
        match coverage {
            CoverageType::BodilyInjuryLiability => Some(self.bodily_injury),
            CoverageType::PropertyDamageLiability => Some(self.property_damage),
            CoverageType::UninsuredMotorist => Some(self.uninsured_motorist),
            CoverageType::RentalCar => self.rental,
            CoverageType::Comprehensive | CoverageType::Collision => self.deductible,
        }
    }
}

/// Returns the limits and deductibles for a coverage level
pub fn coverage_limits(level: CoverageLevel) -> CoverageLimits {
    match level {
        CoverageLevel::Basic => CoverageLimits {
            bodily_injury: "$15,000/$30,000",
            property_damage: "$5,000",
            uninsured_motorist: "$15,000/$30,000",
            rental: None,
            deductible: None,
        },
        CoverageLevel::Standard => CoverageLimits {
            bodily_injury: "$50,000/$100,000",
            property_damage: "$25,000",
            uninsured_motorist: "$50,000/$100,000",
            rental: Some("$25/day, $750 maximum"),
            deductible: Some("$500 deductible"),
        },
        CoverageLevel::Premium => CoverageLimits {
            bodily_injury: "$100,000/$300,000",
            property_damage: "$50,000",
            uninsured_motorist: "$100,000/$300,000",
            rental: Some("$30/day, $900 maximum"),
            deductible: Some("$250 deductible"),
        },
    }
}

/// One itemized coverage on a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageLine {
    /// Coverage name
    pub name: String,
    /// Limit or deductible text
    pub amount: String,
    /// Premium contribution, rounded to cents
    pub premium: Money,
    /// What the coverage protects
    pub description: String,
}

impl CoverageLine {
    fn new(coverage: CoverageType, amount: &str, premium: Decimal) -> Self {
        Self {
            name: coverage.name().to_string(),
            amount: amount.to_string(),
            premium: Money::new(premium),
            description: coverage.description().to_string(),
        }
    }
}

/// Premium of one coverage type at a level and vehicle value, unrounded
pub fn line_premium(coverage: CoverageType, level: CoverageLevel, value: VehicleValue) -> Decimal {
    let base = coverage.base_premium();
    match coverage {
        CoverageType::BodilyInjuryLiability
        | CoverageType::PropertyDamageLiability
        | CoverageType::UninsuredMotorist => base * level.premium_multiplier(),
        CoverageType::RentalCar => base * level.optional_multiplier(),
        CoverageType::Comprehensive | CoverageType::Collision => {
            base * coverage_value_multiplier(value) * level.optional_multiplier()
        }
    }
}

/// Builds the ordered coverage lines for a level and vehicle value
///
/// # Arguments
///
/// * `level` - Requested coverage tier
/// * `value` - Vehicle value band, which scales comprehensive and collision
///
/// # Returns
///
/// Three lines at Basic, six at Standard and Premium, each premium rounded
/// to cents
pub fn coverage_lines(level: CoverageLevel, value: VehicleValue) -> Vec<CoverageLine> {
    let limits = coverage_limits(level);

    CoverageType::ALL
        .iter()
        .filter_map(|coverage| {
            limits
                .for_coverage(*coverage)
                .map(|amount| CoverageLine::new(*coverage, amount, line_premium(*coverage, level, value)))
        })
        .collect()
}

/// Sum of the rounded line premiums
pub fn base_premium(lines: &[CoverageLine]) -> Money {
    lines.iter().map(|line| line.premium).sum()
}
