//! Quote request value objects
//!
//! A [`QuoteRequest`] is the validated, typed input to the pricing engine.
//! Each categorical attribute is a closed enum carrying its wire label
//! (`"Under $5,000"`, `"A Lot"`, ...). Labels are what clients send and what
//! quotes echo back; the enums serialize to and parse from them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::RatingError;

macro_rules! rating_option {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every option, in display order
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Returns the wire label for this option
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Returns the wire labels of every option, in display order
            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|option| option.label()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = RatingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok($name::$variant), )+
                    other => Err(RatingError::unknown_option($field, other, &Self::labels())),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let label = String::deserialize(deserializer)?;
                label.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

rating_option! {
    /// Category of the insured vehicle
    VehicleCategory, "vehicle category" {
        Economy => "Economy",
        Standard => "Standard",
        Luxury => "Luxury",
    }
}

rating_option! {
    /// Coverage tier requested
    CoverageLevel, "coverage level" {
        /// Liability and uninsured motorist only
        Basic => "Basic",
        /// Adds rental, comprehensive and collision with a $500 deductible
        Standard => "Standard",
        /// Higher limits and a $250 deductible
        Premium => "Premium",
    }
}

rating_option! {
    /// Marital status of the primary driver
    MaritalStatus, "marital status" {
        Single => "Single",
        Married => "Married",
        Divorced => "Divorced",
        Widowed => "Widowed",
    }
}

rating_option! {
    /// Home ownership status of the primary driver
    HomeOwnership, "home ownership" {
        Own => "Own",
        Rent => "Rent",
        Other => "Other",
    }
}

rating_option! {
    /// How the vehicle is held
    CarOwnership, "car ownership" {
        Own => "Own",
        Lease => "Lease",
        Finance => "Finance",
    }
}

rating_option! {
    /// Estimated market value band of the vehicle
    VehicleValue, "vehicle value" {
        Low => "Under $5,000",
        Medium => "$5,000 - $40,000",
        High => "Over $40,000",
    }
}

rating_option! {
    /// How often the vehicle is driven
    DrivingFrequency, "driving frequency" {
        Low => "Very Little",
        Medium => "Average",
        High => "A Lot",
    }
}

impl CoverageLevel {
    /// Returns true for the tiers that include physical damage and rental coverage
    pub fn includes_physical_damage(&self) -> bool {
        matches!(self, CoverageLevel::Standard | CoverageLevel::Premium)
    }
}

/// A validated request for a vehicle insurance quote
///
/// Construct one through [`crate::validation::QuoteRequestValidator`]; the
/// pricing engine assumes every field is already within bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub vehicle_category: VehicleCategory,
    pub vehicle_year: i32,
    pub coverage_level: CoverageLevel,
    pub marital_status: MaritalStatus,
    pub age: u32,
    pub home_ownership: HomeOwnership,
    pub car_ownership: CarOwnership,
    pub vehicle_value: VehicleValue,
    pub driving_frequency: DrivingFrequency,
    pub zip_code: String,
}

impl QuoteRequest {
    /// Age of the vehicle in whole years relative to `current_year`
    ///
    /// Negative for next year's models.
    pub fn vehicle_age(&self, current_year: i32) -> i32 {
        current_year - self.vehicle_year
    }
}

/// An unvalidated quote request as received from a caller
///
/// Every categorical field is still a free-form label and the numeric
/// fields are unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuoteRequest {
    pub vehicle_category: String,
    pub vehicle_year: i32,
    pub coverage_level: String,
    pub marital_status: String,
    pub age: i32,
    pub home_ownership: String,
    pub car_ownership: String,
    pub vehicle_value: String,
    pub driving_frequency: String,
    pub zip_code: String,
}

impl From<&QuoteRequest> for RawQuoteRequest {
    fn from(request: &QuoteRequest) -> Self {
        Self {
            vehicle_category: request.vehicle_category.label().to_string(),
            vehicle_year: request.vehicle_year,
            coverage_level: request.coverage_level.label().to_string(),
            marital_status: request.marital_status.label().to_string(),
            age: i32::try_from(request.age).unwrap_or(i32::MAX),
            home_ownership: request.home_ownership.label().to_string(),
            car_ownership: request.car_ownership.label().to_string(),
            vehicle_value: request.vehicle_value.label().to_string(),
            driving_frequency: request.driving_frequency.label().to_string(),
            zip_code: request.zip_code.clone(),
        }
    }
}
