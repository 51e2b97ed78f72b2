//! Pricing Engine Tests
//!
//! # Test Organization
//!
//! - `sample_quote_tests` - The worked sample request, end to end
//! - `minimum_premium_tests` - Floor behavior
//! - `identity_tests` - Quote ids, expiration and timestamps
//! - `proptests` - Invariants over every valid request

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{Clock, FixedClock, SequentialQuoteIdGenerator};
use domain_rating::{PricingEngine, MINIMUM_PREMIUM};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use test_utils::{
    assert_money_eq, assert_quote_consistent, quote_request_strategy, ClockFixtures,
    EngineFixtures, RequestFixtures,
};

/// Clock one second before New Year that ticks into 2027 on every later read
#[derive(Debug, Default)]
struct YearEndClock {
    reads: AtomicUsize,
}

impl Clock for YearEndClock {
    fn now(&self) -> DateTime<Utc> {
        let seconds = self.reads.fetch_add(1, Ordering::SeqCst) as u32;
        Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap()
            + chrono::Duration::seconds(i64::from(seconds))
    }
}

mod sample_quote_tests {
    use super::*;

    #[test]
    fn test_sample_final_premium() {
        let quote = EngineFixtures::fixed().price(&RequestFixtures::sample());

        assert_money_eq(quote.base_premium, dec!(1200.00));
        assert_money_eq(quote.subtotal, dec!(1479.32));
        assert_money_eq(quote.total_discounts, dec!(225));
        assert_money_eq(quote.final_premium, dec!(1254.32));
        assert_quote_consistent(&quote);
    }

    #[test]
    fn test_sample_rounded_factors() {
        let quote = EngineFixtures::fixed().price(&RequestFixtures::sample());

        assert_eq!(quote.factors.age_factor, dec!(1.00));
        assert_eq!(quote.factors.location_factor, dec!(1.23));
        assert_eq!(quote.factors.marital_factor, dec!(0.90));
        assert_eq!(quote.factors.vehicle_factor, dec!(1.11));
        assert_eq!(quote.factors.driving_factor, dec!(1.00));
    }

    #[test]
    fn test_quote_echoes_request() {
        let request = RequestFixtures::young_driver();
        let quote = EngineFixtures::fixed().price(&request);

        assert_eq!(quote.request, request);
        assert_eq!(quote.coverages.len(), 6);
        assert!(quote.discounts.is_empty());
        assert_quote_consistent(&quote);
    }

    /// Pricing the same request twice yields identical amounts
    #[test]
    fn test_pricing_is_deterministic() {
        let engine = EngineFixtures::fixed();
        let first = engine.price(&RequestFixtures::young_driver());
        let second = engine.price(&RequestFixtures::young_driver());

        assert_eq!(first.final_premium, second.final_premium);
        assert_eq!(first.coverages, second.coverages);
        assert_ne!(first.quote_id, second.quote_id);
    }
}

mod minimum_premium_tests {
    use super::*;

    #[test]
    fn test_discounts_cannot_push_below_minimum() {
        let quote = EngineFixtures::fixed().price(&RequestFixtures::below_minimum());

        assert!(quote.subtotal < quote.total_discounts);
        assert_money_eq(quote.final_premium, MINIMUM_PREMIUM);
        assert!(quote.is_at_minimum());
        assert_quote_consistent(&quote);
    }

    #[test]
    fn test_at_minimum_is_serialized() {
        let quote = EngineFixtures::fixed().price(&RequestFixtures::below_minimum());
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["at_minimum"], true);
        assert_eq!(json["final_premium"], 50.0);
    }

    #[test]
    fn test_sample_is_not_at_minimum() {
        let quote = EngineFixtures::fixed().price(&RequestFixtures::sample());
        assert!(!quote.is_at_minimum());
    }
}

mod identity_tests {
    use super::*;

    #[test]
    fn test_quote_id_and_expiration() {
        let quote = EngineFixtures::fixed().price(&RequestFixtures::sample());

        assert_eq!(quote.quote_id.to_string(), "QM-20261016-1000");
        assert_eq!(quote.expiration_date, ClockFixtures::expiration_date());
        assert_eq!(quote.generated_at, ClockFixtures::quote_day().now());
        assert!(quote.is_valid_on(ClockFixtures::expiration_date()));
        assert!(!quote.is_valid_on(NaiveDate::from_ymd_opt(2026, 11, 16).unwrap()));
    }

    /// Expiration crosses month and year boundaries by calendar days
    #[test]
    fn test_expiration_across_year_end() {
        let engine = PricingEngine::new()
            .with_clock(Arc::new(FixedClock::on(2026, 12, 15).unwrap()))
            .with_id_generator(Arc::new(SequentialQuoteIdGenerator::starting_at(4242)));
        let quote = engine.price(&RequestFixtures::sample());

        assert_eq!(quote.expiration_date, NaiveDate::from_ymd_opt(2027, 1, 14).unwrap());
        assert_eq!(quote.quote_id.to_string(), "QM-20261215-4242");
    }

    /// The engine reads the vehicle age from its own clock
    #[test]
    fn test_current_year_comes_from_clock() {
        let later = PricingEngine::new().with_clock(Arc::new(FixedClock::on(2030, 1, 1).unwrap()));
        let quote = later.price(&RequestFixtures::sample());

        // Seven years old: no new vehicle discount, 1.2 − 0.21 year term
        assert_eq!(quote.factors.vehicle_factor, dec!(0.99));
        assert!(quote.discounts.iter().all(|d| d.name != "New Vehicle Discount"));
    }

    /// The quote id, expiration and vehicle age all come from one clock read
    #[test]
    fn test_engine_reads_clock_once() {
        let clock = Arc::new(YearEndClock::default());
        let engine = PricingEngine::new()
            .with_clock(clock.clone())
            .with_id_generator(Arc::new(SequentialQuoteIdGenerator::default()));
        let quote = engine.price(&RequestFixtures::sample());

        assert_eq!(clock.reads.load(Ordering::SeqCst), 1);
        assert_eq!(quote.quote_id.to_string(), "QM-20261231-1000");
        // 2023 model priced in 2026: three years old, still a new vehicle
        assert_eq!(quote.factors.vehicle_factor, dec!(1.11));
        assert!(quote.discounts.iter().any(|d| d.name == "New Vehicle Discount"));
    }

    #[test]
    fn test_random_ids_are_well_formed() {
        let engine = PricingEngine::new().with_clock(Arc::new(ClockFixtures::quote_day()));
        for _ in 0..50 {
            let id = engine.price(&RequestFixtures::sample()).quote_id;
            assert!((1000..=9999).contains(&id.suffix()));
            assert!(id.to_string().starts_with("QM-20261016-"));
        }
    }
}

mod serialization_tests {
    use super::*;

    /// Quotes serialize flat, with labels and plain numbers
    #[test]
    fn test_quote_json_shape() {
        let quote = EngineFixtures::fixed().price(&RequestFixtures::sample());
        let json = serde_json::to_value(&quote).unwrap();

        assert_eq!(json["vehicle_value"], "$5,000 - $40,000");
        assert_eq!(json["driving_frequency"], "Average");
        assert_eq!(json["final_premium"], 1254.32);
        assert_eq!(json["location_factor"], 1.23);
        assert_eq!(json["quote_id"], "QM-20261016-1000");
        assert_eq!(json["expiration_date"], "2026-11-15");
        assert_eq!(json["coverages"][0]["premium"], 325.0);
        assert_eq!(json["discounts"][0]["name"], "Homeowner Discount");
    }
}

mod proptests {
    use super::*;

    proptest! {
        /// Every valid request prices to at least the minimum premium
        #[test]
        fn prop_final_premium_at_least_minimum(request in quote_request_strategy()) {
            let quote = EngineFixtures::fixed().price(&request);
            prop_assert!(quote.final_premium.amount() >= MINIMUM_PREMIUM);
        }

        /// Totals always agree with their parts
        #[test]
        fn prop_quote_is_consistent(request in quote_request_strategy()) {
            let quote = EngineFixtures::fixed().price(&request);
            assert_quote_consistent(&quote);
            prop_assert_eq!(quote.coverages.len(), if request.coverage_level.includes_physical_damage() { 6 } else { 3 });
        }
    }
}
