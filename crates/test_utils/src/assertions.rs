//! Custom Test Assertions
//!
//! Assertion helpers for priced quotes that give more meaningful failure
//! messages than bare `assert_eq!`.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_rating::{Quote, MINIMUM_PREMIUM};

/// Asserts that a Money value equals a decimal dollar amount
///
/// # Panics
///
/// Panics if the amounts differ
pub fn assert_money_eq(actual: Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a quote's totals agree with its lines and discounts
///
/// Checks that the base premium is the sum of the coverage lines, the
/// discount total is the sum of the discounts, and the final premium is the
/// floored difference of subtotal and discounts (within a cent, since the
/// subtotal shown is itself rounded). A quote flagged at the minimum must
/// carry exactly the minimum premium.
pub fn assert_quote_consistent(quote: &Quote) {
    let line_total: Money = quote.coverages.iter().map(|line| line.premium).sum();
    assert_eq!(
        quote.base_premium, line_total,
        "Base premium {} does not match coverage lines {}",
        quote.base_premium, line_total
    );

    let discount_total: Money = quote.discounts.iter().map(|discount| discount.amount).sum();
    assert_eq!(
        quote.total_discounts, discount_total,
        "Total discounts {} does not match discount lines {}",
        quote.total_discounts, discount_total
    );

    assert!(
        quote.final_premium.amount() >= MINIMUM_PREMIUM,
        "Final premium {} is below the minimum",
        quote.final_premium
    );

    if quote.is_at_minimum() {
        assert_eq!(
            quote.final_premium.amount(),
            MINIMUM_PREMIUM,
            "Quote is flagged at the minimum but its final premium is {}",
            quote.final_premium
        );
    }

    let expected = (quote.subtotal.amount() - quote.total_discounts.amount()).max(MINIMUM_PREMIUM);
    let diff = (quote.final_premium.amount() - expected).abs();
    assert!(
        diff <= Decimal::new(1, 2),
        "Final premium {} does not follow from subtotal {} and discounts {}",
        quote.final_premium,
        quote.subtotal,
        quote.total_discounts
    );
}
