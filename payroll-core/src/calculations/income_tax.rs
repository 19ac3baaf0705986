//! Income-tax withholding (IRRF), employee side.
//!
//! Withholding uses a single matching bracket, not layered marginal
//! slices: the first row whose upper bound covers the base applies in
//! full, and its flat deduction is subtracted from the nominal tax. The
//! built-in 2024 table (base = gross salary minus the social-security
//! contribution, no dependent allowances):
//!
//! | Upper bound | Rate  | Flat deduction |
//! |-------------|-------|----------------|
//! | 2112.00     | 0%    | 0              |
//! | 2826.65     | 7.5%  | 158.40         |
//! | 3751.05     | 15.0% | 370.40         |
//! | 4664.68     | 22.5% | 651.73         |
//! | (open)      | 27.5% | 884.96         |
//!
//! A low base inside a taxed bracket can make the nominal value
//! negative; the result is floored at zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::PayrollTable;
//! use payroll_core::calculations::WithholdingSchedule;
//!
//! let table = PayrollTable::brazil_2024();
//! let schedule = WithholdingSchedule::new(&table.withholding_brackets);
//!
//! // 2741.18 × 7.5% − 158.40 = 47.1885
//! assert_eq!(schedule.withholding(dec!(2741.18)).unwrap(), dec!(47.19));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::{max, round_half_up};
use crate::models::WithholdingBracket;

/// Errors that can occur when computing the income-tax withholding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncomeTaxError {
    /// No withholding brackets were provided.
    #[error("no withholding brackets provided")]
    NoBrackets,

    /// The withholding base was negative.
    #[error("withholding base must be non-negative, got {0}")]
    NegativeBase(Decimal),

    /// No bracket covers the base (the table has no open-ended row).
    #[error("no withholding bracket covers base {0}")]
    NoMatchingBracket(Decimal),
}

/// Single-matching-bracket withholding schedule.
#[derive(Debug, Clone)]
pub struct WithholdingSchedule<'a> {
    brackets: &'a [WithholdingBracket],
}

impl<'a> WithholdingSchedule<'a> {
    /// Creates a schedule over the given brackets, sorted ascending by
    /// upper bound with the open-ended row last.
    pub fn new(brackets: &'a [WithholdingBracket]) -> Self {
        Self { brackets }
    }

    /// Computes the withholding tax for a base amount.
    ///
    /// Scans ascending for the first bracket whose upper bound is at
    /// least the base, applies `base × rate − flat_deduction`, floors at
    /// zero and rounds to the cent.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeTaxError`] if the bracket table is empty, the base
    /// is negative, or no bracket covers the base.
    pub fn withholding(
        &self,
        base: Decimal,
    ) -> Result<Decimal, IncomeTaxError> {
        if self.brackets.is_empty() {
            return Err(IncomeTaxError::NoBrackets);
        }
        if base < Decimal::ZERO {
            return Err(IncomeTaxError::NegativeBase(base));
        }

        let bracket = self
            .brackets
            .iter()
            .find(|b| match b.upper_bound {
                Some(upper) => base <= upper,
                None => true,
            })
            .ok_or(IncomeTaxError::NoMatchingBracket(base))?;

        let nominal = base * bracket.rate - bracket.flat_deduction;

        Ok(round_half_up(max(nominal, Decimal::ZERO)))
    }
}
