use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::LineItem;

/// Input for one employee's monthly payroll computation.
///
/// Optional monetary fields default to zero and collections to empty, so
/// a partially-filled record computes the same breakdown the caller would
/// get by spelling the zeros out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Monthly gross salary before any deduction.
    pub gross_salary: Decimal,

    /// Whether the transport-voucher deduction applies.
    #[serde(default)]
    pub has_transport_voucher: bool,

    /// Flat additional employee-side deduction.
    #[serde(default)]
    pub other_deductions: Decimal,

    /// Employer-paid benefit line items.
    #[serde(default)]
    pub benefits: Vec<LineItem>,

    /// Employer-paid miscellaneous cost line items.
    #[serde(default)]
    pub other_employer_costs: Vec<LineItem>,
}
