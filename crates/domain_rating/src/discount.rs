//! Flat dollar discounts
//!
//! Each rule is evaluated independently against the request; every rule that
//! matches contributes its full amount. Rules are listed in quote order.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use crate::request::{CarOwnership, CoverageLevel, HomeOwnership, MaritalStatus, QuoteRequest};

/// Youngest age that qualifies for the experienced driver discount
pub const EXPERIENCED_DRIVER_MIN_AGE: u32 = 30;

/// Oldest age that qualifies for the experienced driver discount
pub const EXPERIENCED_DRIVER_MAX_AGE: u32 = 65;

/// Maximum vehicle age, in years, for the new vehicle discount
pub const NEW_VEHICLE_MAX_AGE: i32 = 3;

/// The discount rules offered on a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountRule {
    Homeowner,
    MarriedDriver,
    ExperiencedDriver,
    MultiPolicy,
    NewVehicle,
    VehicleOwner,
}

impl DiscountRule {
    /// Every rule, in quote order
    pub const ALL: [DiscountRule; 6] = [
        DiscountRule::Homeowner,
        DiscountRule::MarriedDriver,
        DiscountRule::ExperiencedDriver,
        DiscountRule::MultiPolicy,
        DiscountRule::NewVehicle,
        DiscountRule::VehicleOwner,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DiscountRule::Homeowner => "Homeowner Discount",
            DiscountRule::MarriedDriver => "Married Driver Discount",
            DiscountRule::ExperiencedDriver => "Experienced Driver Discount",
            DiscountRule::MultiPolicy => "Multi-Policy Discount",
            DiscountRule::NewVehicle => "New Vehicle Discount",
            DiscountRule::VehicleOwner => "Vehicle Owner Discount",
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            DiscountRule::Homeowner => Money::new(dec!(75)),
            DiscountRule::MarriedDriver => Money::new(dec!(50)),
            DiscountRule::ExperiencedDriver => Money::new(dec!(40)),
            DiscountRule::MultiPolicy => Money::new(dec!(100)),
            DiscountRule::NewVehicle => Money::new(dec!(60)),
            DiscountRule::VehicleOwner => Money::new(dec!(30)),
        }
    }

    /// Short description printed on the quote
    pub fn description(&self) -> &'static str {
        match self {
            DiscountRule::Homeowner => "Discount for customers who own their home",
            DiscountRule::MarriedDriver => "Discount for married drivers",
            DiscountRule::ExperiencedDriver => "Discount for drivers aged 30-65",
            DiscountRule::MultiPolicy => "Discount for bundling auto with homeowners insurance",
            DiscountRule::NewVehicle => "Discount for newer vehicles with modern safety features",
            DiscountRule::VehicleOwner => "Discount for customers who own their vehicles",
        }
    }

    /// Returns true if the request qualifies for this discount
    ///
    /// # Arguments
    ///
    /// * `request` - The validated quote request
    /// * `current_year` - Calendar year used to age the vehicle
    pub fn applies(&self, request: &QuoteRequest, current_year: i32) -> bool {
        match self {
            DiscountRule::Homeowner => request.home_ownership == HomeOwnership::Own,
            DiscountRule::MarriedDriver => request.marital_status == MaritalStatus::Married,
            DiscountRule::ExperiencedDriver => {
                (EXPERIENCED_DRIVER_MIN_AGE..=EXPERIENCED_DRIVER_MAX_AGE).contains(&request.age)
            }
            DiscountRule::MultiPolicy => {
                request.home_ownership == HomeOwnership::Own
                    && request.coverage_level == CoverageLevel::Premium
            }
            DiscountRule::NewVehicle => request.vehicle_age(current_year) <= NEW_VEHICLE_MAX_AGE,
            DiscountRule::VehicleOwner => request.car_ownership == CarOwnership::Own,
        }
    }
}

/// A discount applied to a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub name: String,
    pub amount: Money,
    pub description: String,
}

impl From<DiscountRule> for Discount {
    fn from(rule: DiscountRule) -> Self {
        Self {
            name: rule.name().to_string(),
            amount: rule.amount(),
            description: rule.description().to_string(),
        }
    }
}

/// Returns every discount the request qualifies for, in quote order
pub fn applicable_discounts(request: &QuoteRequest, current_year: i32) -> Vec<Discount> {
    DiscountRule::ALL
        .iter()
        .filter(|rule| rule.applies(request, current_year))
        .map(|rule| Discount::from(*rule))
        .collect()
}

/// Sum of discount amounts
pub fn total_discounts(discounts: &[Discount]) -> Money {
    discounts.iter().map(|discount| discount.amount).sum()
}
