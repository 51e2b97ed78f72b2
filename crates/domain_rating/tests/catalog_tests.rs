//! Rating Catalog Tests

use domain_rating::catalog::{
    available_vehicle_years, coverage_explanation, discount_explanations,
    pricing_factors_explanation, sample_quote_request, CoverageExplanation,
};
use domain_rating::{CoverageLevel, QuoteRequestValidator, VehicleValue};
use rust_decimal_macros::dec;
use test_utils::{ClockFixtures, EngineFixtures};

#[test]
fn test_vehicle_years_newest_first() {
    let years = available_vehicle_years(ClockFixtures::quote_date());

    assert_eq!(years.len(), 21);
    assert_eq!(years.first(), Some(&2026));
    assert_eq!(years.last(), Some(&2006));
}

#[test]
fn test_option_lists() {
    assert_eq!(
        VehicleValue::labels(),
        vec!["Under $5,000", "$5,000 - $40,000", "Over $40,000"]
    );
    assert_eq!(CoverageLevel::labels(), vec!["Basic", "Standard", "Premium"]);
}

#[test]
fn test_basic_explanation_omits_optional_coverages() {
    match coverage_explanation(Some(CoverageLevel::Basic)) {
        CoverageExplanation::Level { coverage_level, coverages } => {
            assert_eq!(coverage_level, CoverageLevel::Basic);
            assert_eq!(coverages.len(), 3);
            assert_eq!(coverages[0].limit, "$15,000 per person/$30,000 per accident");
            assert_eq!(coverages[1].limit, "$5,000 per accident");
        }
        other => panic!("Expected a single-level explanation, got {:?}", other),
    }
}

#[test]
fn test_full_explanation_marks_missing_coverages() {
    match coverage_explanation(None) {
        CoverageExplanation::AllLevels { coverage_levels, coverages } => {
            assert_eq!(coverage_levels.len(), 3);
            assert_eq!(coverages.len(), 6);
            let collision = &coverages[5];
            assert_eq!(collision.name, "Collision");
            assert_eq!(collision.limits[0].limit, "Not included");
            assert_eq!(collision.limits[2].limit, "$250 deductible");
        }
        other => panic!("Expected an all-level explanation, got {:?}", other),
    }
}

/// Multipliers shown to customers come from the pricing tables
#[test]
fn test_pricing_factors_use_live_multipliers() {
    let factors = pricing_factors_explanation();
    let driving = factors
        .iter()
        .find(|f| f.factor == "Driving frequency")
        .unwrap();

    assert_eq!(driving.impacts[0].option, "Very Little");
    assert_eq!(driving.impacts[0].multiplier, dec!(0.8));

    let age = factors.iter().find(|f| f.factor == "Driver age").unwrap();
    assert_eq!(age.impacts.len(), 6);
    assert_eq!(age.impacts[5].multiplier, dec!(1.3));
}

#[test]
fn test_discount_explanations() {
    let discounts = discount_explanations();

    assert_eq!(discounts.len(), 6);
    assert_eq!(discounts[3].name, "Multi-Policy Discount");
    assert_eq!(discounts[3].typical_amount.to_string(), "$100.00");
}

/// The sample request validates and prices to the documented example
#[test]
fn test_sample_request_prices_to_1254_32() {
    let today = ClockFixtures::quote_date();
    let raw = sample_quote_request(today);
    assert_eq!(raw.vehicle_year, 2023);

    let request = QuoteRequestValidator::validate(&raw, today).unwrap();
    let quote = EngineFixtures::fixed().price(&request);
    assert_eq!(quote.final_premium.amount(), dec!(1254.32));
}
