//! Decimal rounding helpers.
//!
//! All monetary values in the workspace are [`rust_decimal::Decimal`]; binary
//! floating point is never used for money.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to two decimal places, midpoint away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a rating average to one decimal place, midpoint away from zero.
#[must_use]
pub fn round_rating(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
