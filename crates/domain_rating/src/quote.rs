//! The priced quote value

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, QuoteId};
use crate::coverage::CoverageLine;
use crate::discount::Discount;
use crate::factors::RatingFactors;
use crate::request::QuoteRequest;

/// Floor applied to every final premium
pub const MINIMUM_PREMIUM: Decimal = dec!(50);

/// Days a quote stays valid
pub const QUOTE_VALIDITY_DAYS: i64 = 30;

/// A fully priced quote
///
/// Serializes flat: the request fields and the rounded factors sit alongside
/// the totals, matching the shape API clients consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(flatten)]
    pub request: QuoteRequest,
    pub coverages: Vec<CoverageLine>,
    pub base_premium: Money,
    /// Factors rounded to two decimals
    #[serde(flatten)]
    pub factors: RatingFactors,
    pub discounts: Vec<Discount>,
    /// Base premium times every factor, before discounts
    pub subtotal: Money,
    pub total_discounts: Money,
    pub final_premium: Money,
    /// True when the minimum premium floor set the final premium
    pub at_minimum: bool,
    pub quote_id: QuoteId,
    pub expiration_date: NaiveDate,
    pub generated_at: DateTime<Utc>,
}

impl Quote {
    /// Returns true if the minimum premium floor set the final premium
    pub fn is_at_minimum(&self) -> bool {
        self.at_minimum
    }

    /// Returns true if the quote is still valid on `date`
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        date <= self.expiration_date
    }

    /// Short vehicle description, e.g. `2023 Standard`
    pub fn vehicle_description(&self) -> String {
        format!("{} {}", self.request.vehicle_year, self.request.vehicle_category)
    }
}
