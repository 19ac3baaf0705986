//! Full per-employee payroll breakdown.
//!
//! Orchestrates the monthly computation over a [`PayrollTable`]:
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Employee social-security contribution (progressive) |
//! | 2    | Withholding base: gross minus contribution, floored at 0 |
//! | 3    | Income-tax withholding over the base |
//! | 4    | Transport-voucher deduction (table rate of gross, if opted in) |
//! | 5    | Other flat deductions |
//! | 6    | Total deductions: steps 1 + 3 + 4 + 5 |
//! | 7    | Net salary: gross minus total deductions (not floored) |
//! | 8    | Employer burden (four flat percentages) |
//! | 9    | Benefit line-item total |
//! | 10   | Other employer-cost line-item total |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::{LineItem, PayrollInput, PayrollTable};
//! use payroll_core::calculations::PayrollWorksheet;
//!
//! let table = PayrollTable::brazil_2024();
//! let input = PayrollInput {
//!     gross_salary: dec!(3000.00),
//!     has_transport_voucher: true,
//!     benefits: vec![LineItem::new("Meal voucher", dec!(300.00))],
//!     ..PayrollInput::default()
//! };
//!
//! let breakdown = PayrollWorksheet::new(&table).calculate(&input).unwrap();
//!
//! assert_eq!(breakdown.social_security_employee, dec!(258.82));
//! assert_eq!(breakdown.net_salary, dec!(2513.99));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::{max, round_half_up};
use crate::calculations::employer_burden::employer_burden;
use crate::calculations::income_tax::{IncomeTaxError, WithholdingSchedule};
use crate::calculations::social_security::{SocialSecurityError, SocialSecuritySchedule};
use crate::models::{LineItem, PayrollBreakdown, PayrollInput, PayrollTable};

/// Errors that can occur while computing a payroll breakdown.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayrollWorksheetError {
    /// The gross salary was negative.
    #[error("gross salary must be non-negative, got {0}")]
    NegativeGrossSalary(Decimal),

    /// The flat other-deductions amount was negative.
    #[error("other deductions must be non-negative, got {0}")]
    NegativeOtherDeductions(Decimal),

    /// A benefit or employer-cost line item had a negative amount.
    #[error("line item '{name}' has negative amount {amount}")]
    NegativeLineItem { name: String, amount: Decimal },

    /// The social-security schedule rejected the computation.
    #[error("social security: {0}")]
    SocialSecurity(#[from] SocialSecurityError),

    /// The withholding schedule rejected the computation.
    #[error("income tax: {0}")]
    IncomeTax(#[from] IncomeTaxError),
}

/// Calculator for the full payroll breakdown of one employee.
#[derive(Debug, Clone)]
pub struct PayrollWorksheet<'a> {
    table: &'a PayrollTable,
}

impl<'a> PayrollWorksheet<'a> {
    /// Creates a worksheet over the given payroll table.
    pub fn new(table: &'a PayrollTable) -> Self {
        Self { table }
    }

    /// Computes the complete breakdown for one input record.
    ///
    /// The computation is pure: identical inputs always produce identical
    /// breakdowns.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollWorksheetError`] if any monetary input is
    /// negative or a bracket schedule is unusable.
    pub fn calculate(
        &self,
        input: &PayrollInput,
    ) -> Result<PayrollBreakdown, PayrollWorksheetError> {
        self.validate(input)?;

        let social_security_employee =
            SocialSecuritySchedule::new(
                &self.table.contribution_brackets,
                self.table.contribution_ceiling,
            )
            .contribution(input.gross_salary)?;

        let withholding_base = max(
            input.gross_salary - social_security_employee,
            Decimal::ZERO,
        );
        let income_tax =
            WithholdingSchedule::new(&self.table.withholding_brackets)
                .withholding(withholding_base)?;

        let transport_voucher_deduction = self.transport_voucher_deduction(input);
        let other_deductions = round_half_up(input.other_deductions);

        let total_deductions = round_half_up(
            social_security_employee + income_tax + transport_voucher_deduction + other_deductions,
        );

        // Not floored at zero: flat deductions larger than the gross
        // produce a negative net.
        let net_salary = round_half_up(input.gross_salary - total_deductions);

        let burden = employer_burden(&self.table.employer_rates, input.gross_salary);

        Ok(PayrollBreakdown {
            gross_salary: round_half_up(input.gross_salary),
            social_security_employee,
            income_tax,
            transport_voucher_deduction,
            other_deductions,
            total_deductions,
            net_salary,
            employer_social_security: burden.social_security,
            severance_fund: burden.severance_fund,
            accident_insurance: burden.accident_insurance,
            third_party_contributions: burden.third_party_contributions,
            total_employer_burden: burden.total,
            total_benefits: Self::line_item_total(&input.benefits),
            total_other_employer_costs: Self::line_item_total(&input.other_employer_costs),
        })
    }

    fn validate(
        &self,
        input: &PayrollInput,
    ) -> Result<(), PayrollWorksheetError> {
        if input.gross_salary < Decimal::ZERO {
            return Err(PayrollWorksheetError::NegativeGrossSalary(
                input.gross_salary,
            ));
        }
        if input.other_deductions < Decimal::ZERO {
            return Err(PayrollWorksheetError::NegativeOtherDeductions(
                input.other_deductions,
            ));
        }
        for item in input.benefits.iter().chain(&input.other_employer_costs) {
            if item.amount < Decimal::ZERO {
                return Err(PayrollWorksheetError::NegativeLineItem {
                    name: item.name.clone(),
                    amount: item.amount,
                });
            }
        }
        Ok(())
    }

    fn transport_voucher_deduction(
        &self,
        input: &PayrollInput,
    ) -> Decimal {
        if input.has_transport_voucher {
            round_half_up(input.gross_salary * self.table.transport_voucher_rate)
        } else {
            Decimal::ZERO
        }
    }

    fn line_item_total(items: &[LineItem]) -> Decimal {
        round_half_up(items.iter().map(|item| item.amount).sum())
    }
}
