//! Progressive social-security (INSS) contribution, employee side.
//!
//! The contribution is assembled from marginal slices: each bracket taxes
//! only the part of the salary between the previous bracket's upper bound
//! and its own, and the salary is clamped to a ceiling before any bracket
//! applies. For the built-in 2024 table:
//!
//! | Upper bound | Marginal rate |
//! |-------------|---------------|
//! | 1412.00     | 7.5%          |
//! | 2666.68     | 9.0%          |
//! | 4000.03     | 12.0%         |
//! | 7786.02     | 14.0%         |
//!
//! Salaries at or above the 7786.02 ceiling all pay the same fixed
//! contribution (908.86 with the table above).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::PayrollTable;
//! use payroll_core::calculations::SocialSecuritySchedule;
//!
//! let table = PayrollTable::brazil_2024();
//! let schedule =
//!     SocialSecuritySchedule::new(&table.contribution_brackets, table.contribution_ceiling);
//!
//! // 1412.00 × 7.5% + 1254.68 × 9% + 333.32 × 12% = 258.8196
//! assert_eq!(schedule.contribution(dec!(3000.00)).unwrap(), dec!(258.82));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::round_half_up;
use crate::models::ContributionBracket;

/// Errors that can occur when computing the social-security contribution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SocialSecurityError {
    /// No contribution brackets were provided.
    #[error("no contribution brackets provided")]
    NoBrackets,

    /// The gross salary was negative.
    #[error("gross salary must be non-negative, got {0}")]
    NegativeSalary(Decimal),
}

/// Progressive contribution schedule capped at a ceiling salary.
#[derive(Debug, Clone)]
pub struct SocialSecuritySchedule<'a> {
    brackets: &'a [ContributionBracket],
    ceiling: Decimal,
}

impl<'a> SocialSecuritySchedule<'a> {
    /// Creates a schedule over the given brackets.
    ///
    /// Brackets must be sorted ascending by upper bound; the last closed
    /// bracket is expected to reach the ceiling.
    pub fn new(
        brackets: &'a [ContributionBracket],
        ceiling: Decimal,
    ) -> Self {
        Self { brackets, ceiling }
    }

    /// Computes the employee-side contribution for a gross salary.
    ///
    /// The salary is clamped to the ceiling, then each bracket taxes its
    /// marginal slice until the bracket containing the clamped salary is
    /// reached. The accumulated sum is rounded to the cent.
    ///
    /// # Errors
    ///
    /// Returns [`SocialSecurityError`] if the bracket table is empty or
    /// the salary is negative.
    pub fn contribution(
        &self,
        gross_salary: Decimal,
    ) -> Result<Decimal, SocialSecurityError> {
        if self.brackets.is_empty() {
            return Err(SocialSecurityError::NoBrackets);
        }
        if gross_salary < Decimal::ZERO {
            return Err(SocialSecurityError::NegativeSalary(gross_salary));
        }

        let base = if gross_salary > self.ceiling {
            debug!(
                %gross_salary,
                ceiling = %self.ceiling,
                "gross salary above contribution ceiling; clamping"
            );
            self.ceiling
        } else {
            gross_salary
        };

        let mut previous = Decimal::ZERO;
        let mut total = Decimal::ZERO;
        let mut covered = false;

        for bracket in self.brackets {
            // An open-ended row covers whatever remains of the base.
            let upper = bracket.upper_bound.unwrap_or(base);
            let slice = base.min(upper) - previous;
            if slice <= Decimal::ZERO {
                covered = true;
                break;
            }
            total += slice * bracket.rate;
            previous = upper;
            if base <= upper {
                covered = true;
                break;
            }
        }

        if !covered && base > previous {
            warn!(
                %base,
                last_bracket_bound = %previous,
                "contribution brackets do not cover the clamped salary; remainder untaxed"
            );
        }

        Ok(round_half_up(total))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::PayrollTable;

    fn brazil_schedule(table: &PayrollTable) -> SocialSecuritySchedule<'_> {
        SocialSecuritySchedule::new(&table.contribution_brackets, table.contribution_ceiling)
    }

    #[test]
    fn contribution_is_zero_for_zero_salary() {
        let table = PayrollTable::brazil_2024();

        let result = brazil_schedule(&table).contribution(dec!(0.00));

        assert_eq!(result, Ok(dec!(0.00)));
    }

    #[test]
    fn contribution_within_first_bracket() {
        let table = PayrollTable::brazil_2024();

        let result = brazil_schedule(&table).contribution(dec!(1000.00));

        assert_eq!(result, Ok(dec!(75.00)));
    }

    #[test]
    fn contribution_at_first_bracket_bound() {
        let table = PayrollTable::brazil_2024();

        let result = brazil_schedule(&table).contribution(dec!(1412.00));

        // 1412.00 × 7.5% exactly
        assert_eq!(result, Ok(dec!(105.90)));
    }

    #[test]
    fn contribution_spanning_two_brackets() {
        let table = PayrollTable::brazil_2024();

        let result = brazil_schedule(&table).contribution(dec!(2000.00));

        // 105.90 + (2000 - 1412) × 9% = 105.90 + 52.92
        assert_eq!(result, Ok(dec!(158.82)));
    }

    #[test]
    fn contribution_spanning_three_brackets() {
        let table = PayrollTable::brazil_2024();

        let result = brazil_schedule(&table).contribution(dec!(3000.00));

        // 105.90 + 112.9212 + 333.32 × 12% = 258.8196
        assert_eq!(result, Ok(dec!(258.82)));
    }

    #[test]
    fn contribution_at_ceiling() {
        let table = PayrollTable::brazil_2024();

        let result = brazil_schedule(&table).contribution(dec!(7786.02));

        // 105.90 + 112.9212 + 160.0020 + 3785.99 × 14% = 908.8618
        assert_eq!(result, Ok(dec!(908.86)));
    }

    #[test]
    fn contribution_saturates_above_ceiling() {
        let table = PayrollTable::brazil_2024();
        let schedule = brazil_schedule(&table);

        let at_ceiling = schedule.contribution(dec!(7786.02)).unwrap();

        assert_eq!(schedule.contribution(dec!(10000.00)), Ok(at_ceiling));
        assert_eq!(schedule.contribution(dec!(50000.00)), Ok(at_ceiling));
    }

    #[test]
    fn contribution_is_monotonic_below_ceiling() {
        let table = PayrollTable::brazil_2024();
        let schedule = brazil_schedule(&table);

        let mut previous = schedule.contribution(dec!(0.00)).unwrap();
        for step in 1..=31 {
            let salary = Decimal::from(step * 250);
            let current = schedule.contribution(salary).unwrap();
            assert!(current >= previous, "not monotonic at salary {salary}");
            previous = current;
        }
    }

    #[test]
    fn contribution_stops_at_last_closed_bracket() {
        let brackets = vec![
            ContributionBracket {
                upper_bound: Some(dec!(1000.00)),
                rate: dec!(0.10),
            },
            ContributionBracket {
                upper_bound: Some(dec!(2000.00)),
                rate: dec!(0.20),
            },
        ];
        let schedule = SocialSecuritySchedule::new(&brackets, dec!(7786.02));

        let result = schedule.contribution(dec!(5000.00));

        // 1000 × 10% + 1000 × 20%; the slice above 2000 is uncovered
        assert_eq!(result, Ok(dec!(300.00)));
    }

    #[test]
    fn contribution_handles_open_ended_bracket() {
        let brackets = vec![
            ContributionBracket {
                upper_bound: Some(dec!(1000.00)),
                rate: dec!(0.10),
            },
            ContributionBracket {
                upper_bound: None,
                rate: dec!(0.20),
            },
        ];
        let schedule = SocialSecuritySchedule::new(&brackets, dec!(7786.02));

        let result = schedule.contribution(dec!(3000.00));

        // 1000 × 10% + 2000 × 20%
        assert_eq!(result, Ok(dec!(500.00)));
    }

    #[test]
    fn contribution_rejects_empty_brackets() {
        let schedule = SocialSecuritySchedule::new(&[], dec!(7786.02));

        let result = schedule.contribution(dec!(3000.00));

        assert_eq!(result, Err(SocialSecurityError::NoBrackets));
    }

    #[test]
    fn contribution_rejects_negative_salary() {
        let table = PayrollTable::brazil_2024();

        let result = brazil_schedule(&table).contribution(dec!(-1.00));

        assert_eq!(
            result,
            Err(SocialSecurityError::NegativeSalary(dec!(-1.00)))
        );
    }
}
