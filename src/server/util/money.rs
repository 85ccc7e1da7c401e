//! Monetary amounts.
//!
//! Amounts are stored as fixed precision decimals with two fractional digits and always
//! rendered with exactly two, so `250` is returned as `250.00`. Columns are `DECIMAL(10,2)`,
//! which caps the magnitude at eight integer digits.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits kept for every amount
pub const AMOUNT_SCALE: u32 = 2;

/// Total number of digits an amount column holds
pub const AMOUNT_PRECISION: u32 = 10;

/// Parses a decimal amount from its textual form, rounding to two fractional digits.
///
/// Returns `None` for input that is not a number or whose rounded magnitude does not fit the
/// amount columns.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let amount = Decimal::from_str(input.trim())
        .or_else(|_| Decimal::from_scientific(input.trim()))
        .ok()?;

    let amount = normalize_amount(amount);
    if amount.abs() >= amount_limit() {
        return None;
    }

    Some(amount)
}

/// Smallest magnitude that no longer fits, `10^(precision - scale)`
fn amount_limit() -> Decimal {
    Decimal::from(10u64.pow(AMOUNT_PRECISION - AMOUNT_SCALE))
}

/// Rounds an amount half away from zero to two fractional digits and fixes its scale at two.
pub fn normalize_amount(amount: Decimal) -> Decimal {
    let mut amount =
        amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(AMOUNT_SCALE);
    amount
}

/// Renders an amount with exactly two fractional digits
pub fn format_amount(amount: Decimal) -> String {
    normalize_amount(amount).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_exactly_two_fractional_digits() {
        assert_eq!(format_amount(Decimal::new(250, 0)), "250.00");
        assert_eq!(format_amount(Decimal::new(19999, 2)), "199.99");
        assert_eq!(format_amount(Decimal::new(15, 1)), "1.50");
    }

    #[test]
    fn parses_integer_fractional_and_scientific_input() {
        assert_eq!(parse_amount("250"), Some(Decimal::new(25000, 2)));
        assert_eq!(parse_amount(" 199.99 "), Some(Decimal::new(19999, 2)));
        assert_eq!(parse_amount("1.5e2"), Some(Decimal::new(15000, 2)));
    }

    #[test]
    fn rounds_extra_precision() {
        assert_eq!(parse_amount("10.005").map(format_amount).as_deref(), Some("10.01"));
    }

    #[test]
    fn rejects_amounts_wider_than_the_column() {
        assert_eq!(parse_amount("99999999.99"), Some(Decimal::new(9999999999, 2)));
        assert_eq!(parse_amount("-99999999.99"), Some(Decimal::new(-9999999999, 2)));
        assert_eq!(parse_amount("100000000"), None);
        assert_eq!(parse_amount("99999999.995"), None);
        assert_eq!(parse_amount("123456789012"), None);
        assert_eq!(parse_amount("-1e9"), None);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(parse_amount("ten dollars"), None);
        assert_eq!(parse_amount(""), None);
    }
}
