use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full cost breakdown for one employee's monthly payroll.
///
/// Every monetary field is rounded to two decimal places. Employee-side
/// fields are amounts withheld from the gross salary; employer-side
/// fields are costs the company bears on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Gross salary the breakdown was computed from.
    pub gross_salary: Decimal,

    /// Employee social-security contribution (INSS), progressive up to
    /// the contribution ceiling.
    pub social_security_employee: Decimal,

    /// Income-tax withholding (IRRF) over gross minus social security.
    pub income_tax: Decimal,

    /// Transport-voucher deduction, zero when not opted in.
    pub transport_voucher_deduction: Decimal,

    /// Flat additional employee-side deduction.
    pub other_deductions: Decimal,

    /// Sum of all employee-side deductions.
    pub total_deductions: Decimal,

    /// Gross salary minus total deductions. Not floored at zero: flat
    /// deductions larger than the gross produce a negative net.
    pub net_salary: Decimal,

    /// Employer social-security share (INSS patronal, 20%).
    pub employer_social_security: Decimal,

    /// Severance-fund deposit (FGTS, 8%).
    pub severance_fund: Decimal,

    /// Work-accident insurance (RAT, fixed 2% assumption).
    pub accident_insurance: Decimal,

    /// Third-party/system contributions (5.8%).
    pub third_party_contributions: Decimal,

    /// Sum of the four employer-side contributions, taken after each is
    /// rounded.
    pub total_employer_burden: Decimal,

    /// Sum of benefit line items.
    pub total_benefits: Decimal,

    /// Sum of miscellaneous employer cost line items.
    pub total_other_employer_costs: Decimal,
}

impl PayrollBreakdown {
    /// Total monthly cost of the employee to the company: gross salary
    /// plus employer burden, benefits and other employer costs.
    ///
    /// All four terms carry two decimal places, so the sum is exact and
    /// needs no further rounding.
    pub fn total_company_cost(&self) -> Decimal {
        self.gross_salary
            + self.total_employer_burden
            + self.total_benefits
            + self.total_other_employer_costs
    }
}
