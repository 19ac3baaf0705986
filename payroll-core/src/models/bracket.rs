use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the progressive social-security (INSS) schedule.
///
/// The marginal `rate` applies to the salary slice between the previous
/// row's `upper_bound` and this one. `None` marks an open-ended row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// One row of the income-tax withholding (IRRF) schedule.
///
/// Withholding rows are mutually exclusive, not layered: the first row
/// whose `upper_bound` covers the base applies in full, with
/// `flat_deduction` subtracted afterwards. The final row has no upper
/// bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub flat_deduction: Decimal,
}
