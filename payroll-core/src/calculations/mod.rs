//! Payroll calculation modules.
//!
//! Each module covers one slice of the monthly computation: the
//! progressive social-security contribution, income-tax withholding,
//! employer burden, the full per-employee breakdown and the roster-level
//! aggregation.

pub mod breakdown;
pub mod common;
pub mod employer_burden;
pub mod income_tax;
pub mod roster;
pub mod social_security;

pub use breakdown::{PayrollWorksheet, PayrollWorksheetError};
pub use employer_burden::{EmployerBurden, employer_burden};
pub use income_tax::{IncomeTaxError, WithholdingSchedule};
pub use roster::RosterSummary;
pub use social_security::{SocialSecurityError, SocialSecuritySchedule};
