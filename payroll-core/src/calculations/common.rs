//! Shared helpers for payroll arithmetic.

use rust_decimal::Decimal;

/// Rounds a monetary value to the cent using half-up rounding.
///
/// Midpoints round away from zero, the usual convention for payroll
/// amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(258.8196)), dec!(258.82));
/// assert_eq!(round_half_up(dec!(105.905)), dec!(105.91));
/// assert_eq!(round_half_up(dec!(105.904)), dec!(105.90));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::max;
///
/// assert_eq!(max(dec!(0.00), dec!(-47.19)), dec!(0.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(486.011));

        assert_eq!(result, dec!(486.01));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(486.015));

        assert_eq!(result, dec!(486.02));
    }

    #[test]
    fn round_half_up_rounds_negative_midpoint_away_from_zero() {
        let result = round_half_up(dec!(-486.015));

        assert_eq!(result, dec!(-486.02));
    }

    #[test]
    fn round_half_up_preserves_cent_values() {
        let result = round_half_up(dec!(2513.99));

        assert_eq!(result, dec!(2513.99));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn max_returns_larger_value() {
        let result = max(dec!(-75.00), dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn max_handles_equal_values() {
        let result = max(dec!(180.00), dec!(180.00));

        assert_eq!(result, dec!(180.00));
    }
}
