//! Display formatting for currency amounts.
//!
//! Output follows Vietnamese conventions: `.` groups thousands and `,`
//! separates the fraction. Formatting never feeds back into arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats an amount for display, e.g. `17780000` as `"17.780.000"`.
///
/// At most three fraction digits are kept; trailing zeros are dropped.
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::format_currency;
///
/// assert_eq!(format_currency(dec!(17780000)), "17.780.000");
/// assert_eq!(format_currency(dec!(-1234.5)), "-1.234,5");
/// assert_eq!(format_currency(dec!(0)), "0");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < Decimal::ZERO {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(fraction);
    }
    out
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn groups_by_thousands() {
        assert_eq!(format_currency(dec!(1)), "1");
        assert_eq!(format_currency(dec!(999)), "999");
        assert_eq!(format_currency(dec!(1000)), "1.000");
        assert_eq!(format_currency(dec!(46800000)), "46.800.000");
        assert_eq!(format_currency(dec!(100000000)), "100.000.000");
    }

    #[test]
    fn drops_trailing_fraction_zeros() {
        assert_eq!(format_currency(dec!(2100000.00)), "2.100.000");
        assert_eq!(format_currency(dec!(12.50)), "12,5");
    }

    #[test]
    fn keeps_at_most_three_fraction_digits() {
        assert_eq!(format_currency(dec!(0.12345)), "0,123");
        assert_eq!(format_currency(dec!(0.0005)), "0,001");
    }

    #[test]
    fn prefixes_negative_amounts() {
        assert_eq!(format_currency(dec!(-4914000)), "-4.914.000");
    }

    #[test]
    fn negative_value_rounding_to_zero_has_no_sign() {
        assert_eq!(format_currency(dec!(-0.0001)), "0");
    }
}
