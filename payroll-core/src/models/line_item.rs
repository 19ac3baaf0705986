use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named employer-paid amount: a benefit (meal voucher, food basket)
/// or a miscellaneous cost (uniforms, training).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(
        name: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}
