//! Common utility functions for salary calculations.
//!
//! Shared rounding and comparison helpers used by the insurance, bracket
//! and net-salary calculators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to a whole currency unit, halves away from zero.
///
/// Every rounded quantity in this crate is non-negative, where this agrees
/// with rounding halves upward.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_to_unit;
///
/// assert_eq!(round_to_unit(dec!(185185.17)), dec!(185185));
/// assert_eq!(round_to_unit(dec!(2500.5)), dec!(2501));
/// assert_eq!(round_to_unit(dec!(2500.49)), dec!(2500));
/// assert_eq!(round_to_unit(dec!(-2500.5)), dec!(-2501)); // Away from zero
/// ```
pub fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100), dec!(200)), dec!(200));
/// assert_eq!(max(dec!(-100), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}
