//! Employer-side statutory burden over the gross salary.
//!
//! Four independent flat percentages: the employer social-security share
//! (20%), the severance-fund deposit (8%), work-accident insurance (2%,
//! a fixed assumption rather than a per-company risk class) and
//! third-party contributions (5.8%).
//!
//! Each component is rounded to the cent on its own and the total is
//! summed from the rounded components. The total can therefore differ by
//! a cent from rounding the raw sum; callers downstream expect the
//! component-first order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::EmployerRates;

/// Employer-side costs for one gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerBurden {
    /// Employer social-security share (INSS patronal).
    pub social_security: Decimal,

    /// Severance-fund deposit (FGTS).
    pub severance_fund: Decimal,

    /// Work-accident insurance (RAT).
    pub accident_insurance: Decimal,

    /// Third-party/system contributions.
    pub third_party_contributions: Decimal,

    /// Sum of the four rounded components.
    pub total: Decimal,
}

/// Computes the employer burden for a gross salary.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::PayrollTable;
/// use payroll_core::calculations::employer_burden;
///
/// let table = PayrollTable::brazil_2024();
/// let burden = employer_burden(&table.employer_rates, dec!(3000.00));
///
/// assert_eq!(burden.social_security, dec!(600.00));
/// assert_eq!(burden.total, dec!(1074.00));
/// ```
pub fn employer_burden(
    rates: &EmployerRates,
    gross_salary: Decimal,
) -> EmployerBurden {
    let social_security = round_half_up(gross_salary * rates.social_security);
    let severance_fund = round_half_up(gross_salary * rates.severance_fund);
    let accident_insurance = round_half_up(gross_salary * rates.accident_insurance);
    let third_party_contributions = round_half_up(gross_salary * rates.third_party);

    let total = round_half_up(
        social_security + severance_fund + accident_insurance + third_party_contributions,
    );

    EmployerBurden {
        social_security,
        severance_fund,
        accident_insurance,
        third_party_contributions,
        total,
    }
}
