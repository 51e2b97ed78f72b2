//! Pricing engine
//!
//! Turns a validated [`QuoteRequest`] into a [`Quote`]:
//!
//! 1. Build the coverage lines and sum them into the base premium
//! 2. Multiply by the five rating factors to get the subtotal
//! 3. Subtract every applicable flat discount
//! 4. Floor the result at the minimum premium
//!
//! The engine never fails. Its only inputs beyond the request are the
//! injected clock and quote id generator.

use std::sync::Arc;

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::debug;

use core_kernel::{add_days, Clock, Money, QuoteIdGenerator, RandomQuoteIdGenerator, SystemClock};
use crate::coverage::{base_premium, coverage_lines};
use crate::discount::{applicable_discounts, total_discounts};
use crate::factors::RatingFactors;
use crate::quote::{Quote, MINIMUM_PREMIUM, QUOTE_VALIDITY_DAYS};
use crate::request::QuoteRequest;

/// Prices quote requests
///
/// Cheap to clone and safe to share across request handlers.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    clock: Arc<dyn Clock>,
    id_generator: Arc<dyn QuoteIdGenerator>,
}

impl PricingEngine {
    /// Creates an engine on the system clock with random quote ids
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            id_generator: Arc::new(RandomQuoteIdGenerator),
        }
    }

    /// Replaces the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the quote id generator
    pub fn with_id_generator(mut self, id_generator: Arc<dyn QuoteIdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// Returns the clock this engine prices against
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Prices a request
    ///
    /// Factors are applied at full precision; only the amounts and factor
    /// values stored on the quote are rounded.
    ///
    /// # Arguments
    ///
    /// * `request` - A request that has already passed validation
    ///
    /// # Returns
    ///
    /// The priced quote, expiring thirty days after today
    pub fn price(&self, request: &QuoteRequest) -> Quote {
        let generated_at = self.clock.now();
        let today = generated_at.date_naive();
        let current_year = generated_at.year();

        let coverages = coverage_lines(request.coverage_level, request.vehicle_value);
        let base = base_premium(&coverages);

        let factors = RatingFactors::for_request(request, current_year);
        let adjusted = base.amount() * factors.product();

        let discounts = applicable_discounts(request, current_year);
        let discount_total = total_discounts(&discounts);

        let (final_premium, at_minimum) = apply_minimum(adjusted, discount_total);
        let quote_id = self.id_generator.generate(today);

        debug!(
            quote_id = %quote_id,
            coverage_level = %request.coverage_level,
            base_premium = %base,
            final_premium = %final_premium,
            "Priced quote"
        );

        Quote {
            request: request.clone(),
            coverages,
            base_premium: base,
            factors: factors.rounded(),
            discounts,
            subtotal: Money::new(adjusted),
            total_discounts: discount_total,
            final_premium,
            at_minimum,
            quote_id,
            expiration_date: add_days(today, QUOTE_VALIDITY_DAYS),
            generated_at,
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Subtracts discounts from the unrounded subtotal and floors the result
///
/// Returns the final premium and whether the floor set it. The comparison
/// uses the unrounded subtotal, the same value the floor is applied to.
fn apply_minimum(adjusted: Decimal, discounts: Money) -> (Money, bool) {
    let discounted = adjusted - discounts.amount();
    let floor = Money::new(MINIMUM_PREMIUM);
    (Money::new(discounted).at_least(floor), discounted < MINIMUM_PREMIUM)
}
