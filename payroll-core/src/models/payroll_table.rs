use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ContributionBracket, WithholdingBracket};

/// Flat employer-side contribution rates applied to the gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerRates {
    /// Employer social-security share (INSS patronal).
    pub social_security: Decimal,
    /// Severance-fund deposit (FGTS).
    pub severance_fund: Decimal,
    /// Work-accident insurance (RAT).
    pub accident_insurance: Decimal,
    /// Third-party/system contributions ("terceiros").
    pub third_party: Decimal,
}

/// Everything year-dependent about a payroll computation: bracket
/// schedules, the contribution ceiling and the flat rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTable {
    pub reference_year: i32,

    /// Salary ceiling for the progressive contribution; amounts above it
    /// are not taxed further.
    pub contribution_ceiling: Decimal,

    /// Progressive social-security schedule, ascending by upper bound.
    pub contribution_brackets: Vec<ContributionBracket>,

    /// Income-tax withholding schedule, ascending by upper bound, last
    /// row open-ended.
    pub withholding_brackets: Vec<WithholdingBracket>,

    /// Share of the gross salary withheld when the employee opts into
    /// the transport voucher.
    pub transport_voucher_rate: Decimal,

    pub employer_rates: EmployerRates,
}

impl PayrollTable {
    /// The built-in Brazilian table (2024 approximation).
    ///
    /// INSS is progressive up to the 7786.02 ceiling; IRRF uses the
    /// single-matching-bracket schedule with flat deductions and no
    /// dependent allowances.
    pub fn brazil_2024() -> Self {
        Self {
            reference_year: 2024,
            contribution_ceiling: Decimal::new(7_786_02, 2),
            contribution_brackets: vec![
                ContributionBracket {
                    upper_bound: Some(Decimal::new(1_412_00, 2)),
                    rate: Decimal::new(75, 3),
                },
                ContributionBracket {
                    upper_bound: Some(Decimal::new(2_666_68, 2)),
                    rate: Decimal::new(9, 2),
                },
                ContributionBracket {
                    upper_bound: Some(Decimal::new(4_000_03, 2)),
                    rate: Decimal::new(12, 2),
                },
                ContributionBracket {
                    upper_bound: Some(Decimal::new(7_786_02, 2)),
                    rate: Decimal::new(14, 2),
                },
            ],
            withholding_brackets: vec![
                WithholdingBracket {
                    upper_bound: Some(Decimal::new(2_112_00, 2)),
                    rate: Decimal::ZERO,
                    flat_deduction: Decimal::ZERO,
                },
                WithholdingBracket {
                    upper_bound: Some(Decimal::new(2_826_65, 2)),
                    rate: Decimal::new(75, 3),
                    flat_deduction: Decimal::new(158_40, 2),
                },
                WithholdingBracket {
                    upper_bound: Some(Decimal::new(3_751_05, 2)),
                    rate: Decimal::new(15, 2),
                    flat_deduction: Decimal::new(370_40, 2),
                },
                WithholdingBracket {
                    upper_bound: Some(Decimal::new(4_664_68, 2)),
                    rate: Decimal::new(225, 3),
                    flat_deduction: Decimal::new(651_73, 2),
                },
                WithholdingBracket {
                    upper_bound: None,
                    rate: Decimal::new(275, 3),
                    flat_deduction: Decimal::new(884_96, 2),
                },
            ],
            transport_voucher_rate: Decimal::new(6, 2),
            employer_rates: EmployerRates {
                social_security: Decimal::new(20, 2),
                severance_fund: Decimal::new(8, 2),
                accident_insurance: Decimal::new(2, 2),
                third_party: Decimal::new(58, 3),
            },
        }
    }
}
