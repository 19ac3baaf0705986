//! Brazilian-Real presentation of monetary values.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculations::common::round_half_up;

/// Renders a monetary value in Brazilian-Real notation: `R$ 1.234,56`.
///
/// The value is rounded to the cent first; thousands are separated with
/// `.` and cents with `,`. Negative amounts carry a leading minus sign.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::format::format_brl;
///
/// assert_eq!(format_brl(dec!(2513.99)), "R$ 2.513,99");
/// assert_eq!(format_brl(dec!(-1075)), "-R$ 1.075,00");
/// ```
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    let units = abs.trunc();
    let cents = ((abs - units) * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or(0);

    let sign = if negative { "-" } else { "" };
    let grouped = group_thousands(&units.normalize().to_string());

    format!("{sign}R$ {grouped},{cents:02}")
}

/// Inserts a `.` every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
