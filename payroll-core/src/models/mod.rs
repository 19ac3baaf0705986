mod bracket;
mod line_item;
mod payroll_breakdown;
mod payroll_input;
mod payroll_table;

pub use bracket::{ContributionBracket, WithholdingBracket};
pub use line_item::LineItem;
pub use payroll_breakdown::PayrollBreakdown;
pub use payroll_input::PayrollInput;
pub use payroll_table::{EmployerRates, PayrollTable};
