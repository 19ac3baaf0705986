//! Roster-level aggregation of per-employee breakdowns.
//!
//! Folds the breakdowns of a whole roster into the four company-side
//! subtotals (salaries, benefits, employer burden, other costs) that a
//! cost report is built from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::PayrollBreakdown;

/// Company-side subtotals across a set of employee breakdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    /// Sum of gross salaries.
    pub salaries: Decimal,

    /// Sum of benefit totals.
    pub benefits: Decimal,

    /// Sum of employer-burden totals.
    pub employer_burden: Decimal,

    /// Sum of miscellaneous employer-cost totals.
    pub other_costs: Decimal,

    /// Number of breakdowns folded in.
    pub headcount: usize,
}

impl RosterSummary {
    /// Folds a set of breakdowns into subtotals.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use payroll_core::{PayrollInput, PayrollTable};
    /// use payroll_core::calculations::{PayrollWorksheet, RosterSummary};
    ///
    /// let table = PayrollTable::brazil_2024();
    /// let worksheet = PayrollWorksheet::new(&table);
    /// let breakdowns: Vec<_> = [dec!(2000.00), dec!(3000.00)]
    ///     .into_iter()
    ///     .map(|gross_salary| {
    ///         worksheet
    ///             .calculate(&PayrollInput { gross_salary, ..Default::default() })
    ///             .unwrap()
    ///     })
    ///     .collect();
    ///
    /// let summary = RosterSummary::from_breakdowns(&breakdowns);
    ///
    /// assert_eq!(summary.salaries, dec!(5000.00));
    /// assert_eq!(summary.headcount, 2);
    /// ```
    pub fn from_breakdowns<'a, I>(breakdowns: I) -> Self
    where
        I: IntoIterator<Item = &'a PayrollBreakdown>,
    {
        let mut summary = Self::default();
        for breakdown in breakdowns {
            summary.salaries += breakdown.gross_salary;
            summary.benefits += breakdown.total_benefits;
            summary.employer_burden += breakdown.total_employer_burden;
            summary.other_costs += breakdown.total_other_employer_costs;
            summary.headcount += 1;
        }
        summary
    }

    /// Total monthly cost of the roster to the company.
    pub fn total_company_cost(&self) -> Decimal {
        self.salaries + self.benefits + self.employer_burden + self.other_costs
    }

    /// Average cost per employee, zero for an empty roster.
    pub fn average_cost_per_employee(&self) -> Decimal {
        if self.headcount == 0 {
            return Decimal::ZERO;
        }
        round_half_up(self.total_company_cost() / Decimal::from(self.headcount as u64))
    }
}
