//! Roster CSV input.
//!
//! One row per employee: `name,gross_salary,transport_voucher,
//! other_deductions`. The last two columns may be omitted.

use std::io::Read;

use payroll_core::PayrollInput;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One employee row of the roster CSV.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EmployeeRecord {
    pub name: String,
    pub gross_salary: Decimal,
    #[serde(default)]
    pub transport_voucher: bool,
    #[serde(default)]
    pub other_deductions: Decimal,
}

impl EmployeeRecord {
    /// Payroll input for this employee. Benefits and miscellaneous
    /// employer costs are not carried in the roster CSV.
    pub fn to_input(&self) -> PayrollInput {
        PayrollInput {
            gross_salary: self.gross_salary,
            has_transport_voucher: self.transport_voucher,
            other_deductions: self.other_deductions,
            ..PayrollInput::default()
        }
    }
}

/// Reads all employee rows from a roster CSV.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<EmployeeRecord>, csv::Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader.deserialize().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn reads_full_rows() {
        let csv = "\
name,gross_salary,transport_voucher,other_deductions
Ana Souza,3000.00,true,0
Bruno Lima,2200.00,false,150.00
";

        let records = read_roster(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1],
            EmployeeRecord {
                name: "Bruno Lima".to_string(),
                gross_salary: dec!(2200.00),
                transport_voucher: false,
                other_deductions: dec!(150.00),
            }
        );
    }

    #[test]
    fn optional_columns_default() {
        let csv = "name,gross_salary\nAna Souza,3000.00\n";

        let records = read_roster(csv.as_bytes()).unwrap();

        assert!(!records[0].transport_voucher);
        assert_eq!(records[0].other_deductions, dec!(0));
    }

    #[test]
    fn rejects_malformed_salary() {
        let csv = "name,gross_salary\nAna Souza,abc\n";

        let result = read_roster(csv.as_bytes());

        assert!(result.is_err());
    }

    #[test]
    fn to_input_maps_fields() {
        let record = EmployeeRecord {
            name: "Ana Souza".to_string(),
            gross_salary: dec!(3000.00),
            transport_voucher: true,
            other_deductions: dec!(35.50),
        };

        let input = record.to_input();

        assert_eq!(input.gross_salary, dec!(3000.00));
        assert!(input.has_transport_voucher);
        assert_eq!(input.other_deductions, dec!(35.50));
        assert!(input.benefits.is_empty());
    }
}
