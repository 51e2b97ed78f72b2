//! Rating catalog
//!
//! Reference data served to quoting front ends: the accepted option labels,
//! plain-language explanations of coverages, factors and discounts, and a
//! ready-to-submit sample request. Multipliers and amounts shown here are
//! read from the same tables the engine prices with.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use crate::coverage::{coverage_limits, CoverageType};
use crate::discount::DiscountRule;
use crate::factors::{age_factor, RatingFactor};
use crate::request::{
    CarOwnership, CoverageLevel, DrivingFrequency, HomeOwnership, MaritalStatus,
    RawQuoteRequest, VehicleCategory, VehicleValue,
};
use crate::validation::MAX_VEHICLE_AGE_YEARS;

/// Model years offered for selection, newest first
pub fn available_vehicle_years(today: NaiveDate) -> Vec<i32> {
    let current_year = today.year();
    (current_year - MAX_VEHICLE_AGE_YEARS..=current_year).rev().collect()
}

/// Summary of one coverage tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub level: CoverageLevel,
    pub summary: String,
}

/// Limit of one coverage at one tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLimit {
    pub level: CoverageLevel,
    pub limit: String,
}

/// A coverage with its limits at every tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDetail {
    pub name: String,
    pub description: String,
    pub limits: Vec<LevelLimit>,
}

/// A coverage with its limit at a single tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCoverage {
    pub name: String,
    pub description: String,
    pub limit: String,
}

/// Coverage explanation, either across all tiers or for one tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoverageExplanation {
    AllLevels {
        coverage_levels: Vec<LevelSummary>,
        coverages: Vec<CoverageDetail>,
    },
    Level {
        coverage_level: CoverageLevel,
        coverages: Vec<LevelCoverage>,
    },
}

const NOT_INCLUDED: &str = "Not included";

fn level_summary(level: CoverageLevel) -> &'static str {
    match level {
        CoverageLevel::Basic => {
            "Minimal coverage that meets state requirements. Higher out-of-pocket costs if you have an accident."
        }
        CoverageLevel::Standard => {
            "Balanced coverage with moderate out-of-pocket costs. Includes comprehensive and collision."
        }
        CoverageLevel::Premium => {
            "Maximum protection with lowest out-of-pocket costs. Includes all available coverages with higher limits."
        }
    }
}

fn explanation_name(coverage: CoverageType) -> &'static str {
    match coverage {
        CoverageType::UninsuredMotorist => "Uninsured/Underinsured Motorist",
        other => other.name(),
    }
}

fn long_description(coverage: CoverageType) -> &'static str {
    match coverage {
        CoverageType::BodilyInjuryLiability => {
            "Covers costs if you injure someone else in a car accident. This helps pay for their medical expenses, lost wages, pain and suffering, and legal fees if they sue you."
        }
        CoverageType::PropertyDamageLiability => {
            "Covers damage you cause to other people's property, including their vehicles, buildings, fences, etc. Also covers legal defense costs if you're sued."
        }
        CoverageType::UninsuredMotorist => {
            "Protects you and your passengers if injured by a driver who has insufficient or no insurance. Covers medical bills, lost wages, and pain and suffering."
        }
        CoverageType::RentalCar => {
            "Pays for a rental car while your vehicle is being repaired after a covered accident."
        }
        CoverageType::Comprehensive => {
            "Covers damage to your car from non-collision events like theft, vandalism, fire, natural disasters, falling objects, or hitting an animal."
        }
        CoverageType::Collision => {
            "Covers damage to your car from a collision with another vehicle or object, regardless of who is at fault."
        }
    }
}

/// Long-form limit wording, e.g. `$50,000 per person/$100,000 per accident`
fn limit_explanation(coverage: CoverageType, level: CoverageLevel) -> Option<String> {
    let limit = coverage_limits(level).for_coverage(coverage)?;
    let text = match coverage {
        CoverageType::BodilyInjuryLiability | CoverageType::UninsuredMotorist => {
            match limit.split_once('/') {
                Some((person, accident)) => format!("{} per person/{} per accident", person, accident),
                None => limit.to_string(),
            }
        }
        CoverageType::PropertyDamageLiability => format!("{} per accident", limit),
        CoverageType::RentalCar => match limit.split_once(", ") {
            Some((daily, maximum)) => format!(
                "{} per day, up to {}",
                daily.trim_end_matches("/day"),
                maximum
            ),
            None => limit.to_string(),
        },
        CoverageType::Comprehensive | CoverageType::Collision => limit.to_string(),
    };
    Some(text)
}

/// Explains what each coverage protects and its limits
///
/// With a level, coverages that tier does not include are left out.
pub fn coverage_explanation(level: Option<CoverageLevel>) -> CoverageExplanation {
    match level {
        Some(level) => CoverageExplanation::Level {
            coverage_level: level,
            coverages: CoverageType::ALL
                .iter()
                .filter_map(|coverage| {
                    limit_explanation(*coverage, level).map(|limit| LevelCoverage {
                        name: explanation_name(*coverage).to_string(),
                        description: long_description(*coverage).to_string(),
                        limit,
                    })
                })
                .collect(),
        },
        None => CoverageExplanation::AllLevels {
            coverage_levels: CoverageLevel::ALL
                .iter()
                .map(|level| LevelSummary {
                    level: *level,
                    summary: level_summary(*level).to_string(),
                })
                .collect(),
            coverages: CoverageType::ALL
                .iter()
                .map(|coverage| CoverageDetail {
                    name: explanation_name(*coverage).to_string(),
                    description: long_description(*coverage).to_string(),
                    limits: CoverageLevel::ALL
                        .iter()
                        .map(|level| LevelLimit {
                            level: *level,
                            limit: limit_explanation(*coverage, *level)
                                .unwrap_or_else(|| NOT_INCLUDED.to_string()),
                        })
                        .collect(),
                })
                .collect(),
        },
    }
}

/// How one option moves the premium
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorImpact {
    pub option: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub multiplier: Decimal,
    pub note: String,
}

/// Explanation of one rating factor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorExplanation {
    pub factor: String,
    pub description: String,
    pub impacts: Vec<FactorImpact>,
}

fn impact(option: impl Into<String>, multiplier: Decimal, note: &str) -> FactorImpact {
    FactorImpact {
        option: option.into(),
        multiplier,
        note: note.to_string(),
    }
}

fn option_impacts<T>(options: &[T], notes: &[&str]) -> Vec<FactorImpact>
where
    T: RatingFactor + std::fmt::Display,
{
    options
        .iter()
        .zip(notes)
        .map(|(option, note)| impact(option.to_string(), option.factor(), note))
        .collect()
}

/// Explains every factor that adjusts the base premium
pub fn pricing_factors_explanation() -> Vec<FactorExplanation> {
    vec![
        FactorExplanation {
            factor: "Driver age".to_string(),
            description: "Driver age significantly impacts insurance rates due to risk correlation."
                .to_string(),
            impacts: vec![
                impact("Under 20", age_factor(16), "highest risk"),
                impact("20-24", age_factor(20), "high risk"),
                impact("25-29", age_factor(25), "moderate risk"),
                impact("30-59", age_factor(30), "base rate"),
                impact("60-69", age_factor(60), "slightly elevated risk"),
                impact("70+", age_factor(70), "higher risk"),
            ],
        },
        FactorExplanation {
            factor: "Location".to_string(),
            description: "ZIP codes affect rates based on local accident rates, theft statistics, population density, and weather patterns. Can vary premiums by -20% to +50% depending on location risk assessment."
                .to_string(),
            impacts: Vec::new(),
        },
        FactorExplanation {
            factor: "Marital status".to_string(),
            description: "Statistics show married drivers have fewer accidents on average.".to_string(),
            impacts: option_impacts(
                MaritalStatus::ALL,
                &["slightly higher risk", "lower risk", "base rate", "slightly lower risk"],
            ),
        },
        FactorExplanation {
            factor: "Vehicle category".to_string(),
            description: "Repair and replacement costs differ by vehicle class.".to_string(),
            impacts: option_impacts(
                VehicleCategory::ALL,
                &["lower repair/replacement costs", "base rate", "higher repair/replacement costs"],
            ),
        },
        FactorExplanation {
            factor: "Vehicle age".to_string(),
            description: "Newer vehicles cost more to insure, with premium decreasing ~3% per year of age"
                .to_string(),
            impacts: Vec::new(),
        },
        FactorExplanation {
            factor: "Vehicle value".to_string(),
            description: "Higher-value vehicles cost more to replace.".to_string(),
            impacts: option_impacts(
                VehicleValue::ALL,
                &["lower replacement cost", "base rate", "higher replacement cost"],
            ),
        },
        FactorExplanation {
            factor: "Vehicle ownership".to_string(),
            description: "How the vehicle is held adjusts the vehicle factor.".to_string(),
            impacts: option_impacts(
                CarOwnership::ALL,
                &["slight discount", "slight increase", "base rate"],
            ),
        },
        FactorExplanation {
            factor: "Driving frequency".to_string(),
            description: "More time on the road increases exposure to potential accidents.".to_string(),
            impacts: option_impacts(
                DrivingFrequency::ALL,
                &["lower exposure", "base rate", "higher exposure"],
            ),
        },
    ]
}

/// Explanation of one discount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountExplanation {
    pub name: String,
    pub description: String,
    pub eligibility: String,
    pub typical_amount: Money,
}

fn discount_details(rule: DiscountRule) -> (&'static str, &'static str) {
    match rule {
        DiscountRule::Homeowner => (
            "Discount for customers who own their home. Statistics show homeowners file fewer claims.",
            "Must own your home (not renting or other arrangement).",
        ),
        DiscountRule::MarriedDriver => (
            "Discount for married drivers, who statistically file fewer claims.",
            "Must have marital status of 'Married'.",
        ),
        DiscountRule::ExperiencedDriver => (
            "Discount for drivers in the age range with the best safety records.",
            "Driver must be between 30-65 years old.",
        ),
        DiscountRule::MultiPolicy => (
            "Discount for bundling multiple insurance policies with the same company.",
            "Must own home and have Premium coverage level (indicating interest in comprehensive coverage).",
        ),
        DiscountRule::NewVehicle => (
            "Discount for newer vehicles with modern safety features.",
            "Vehicle must be 3 years old or newer.",
        ),
        DiscountRule::VehicleOwner => (
            "Discount for customers who own their vehicles outright.",
            "Vehicle ownership status must be 'Own' (not leased or financed).",
        ),
    }
}

/// Explains every discount and who qualifies
pub fn discount_explanations() -> Vec<DiscountExplanation> {
    DiscountRule::ALL
        .iter()
        .map(|rule| {
            let (description, eligibility) = discount_details(*rule);
            DiscountExplanation {
                name: rule.name().to_string(),
                description: description.to_string(),
                eligibility: eligibility.to_string(),
                typical_amount: rule.amount(),
            }
        })
        .collect()
}

/// A typical request: a three-year-old mid-value sedan, married 35-year-old homeowner
pub fn sample_quote_request(today: NaiveDate) -> RawQuoteRequest {
    RawQuoteRequest {
        vehicle_category: VehicleCategory::Standard.label().to_string(),
        vehicle_year: today.year() - 3,
        coverage_level: CoverageLevel::Standard.label().to_string(),
        marital_status: MaritalStatus::Married.label().to_string(),
        age: 35,
        home_ownership: HomeOwnership::Own.label().to_string(),
        car_ownership: CarOwnership::Finance.label().to_string(),
        vehicle_value: VehicleValue::Medium.label().to_string(),
        driving_frequency: DrivingFrequency::Medium.label().to_string(),
        zip_code: "90210".to_string(),
    }
}
