//! Money types with precise decimal arithmetic
//!
//! Quotes are priced in a single currency unit (US dollars), so `Money` carries
//! no currency code. Amounts are held as `rust_decimal::Decimal` and always
//! rounded to whole cents on construction.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// Number of decimal places kept for every amount
pub const CENT_PLACES: u32 = 2;

/// A dollar amount rounded to cents
///
/// Serializes as a plain JSON number (`1234.56`), which is what API clients
/// and the agent tooling expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

impl Money {
    /// Creates a new amount, rounding half-to-even to cents
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointNearestEven),
        }
    }

    /// Creates an amount from whole dollars
    pub fn from_dollars(dollars: i64) -> Self {
        Self::new(Decimal::from(dollars))
    }

    /// Creates an amount from minor units (cents)
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, CENT_PLACES))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns `self`, or `minimum` when `self` is below it
    pub fn at_least(self, minimum: Money) -> Self {
        self.max(minimum)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Formats as `$1,234.56`, the style used on back-office records
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.2}", self.amount.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${}.{}", sign, grouped, cents)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.amount + other.amount)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.amount - other.amount)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
