//! Plain-text payroll reports.

use chrono::NaiveDate;
use payroll_core::PayrollBreakdown;
use payroll_core::calculations::RosterSummary;
use payroll_core::format::format_brl;

use crate::roster::EmployeeRecord;

/// Renders the full breakdown of a single salary.
pub fn breakdown_report(breakdown: &PayrollBreakdown) -> String {
    let lines = [
        "Payroll breakdown".to_string(),
        "=================".to_string(),
        row("Gross salary", breakdown.gross_salary),
        String::new(),
        "Employee deductions".to_string(),
        row("  INSS", breakdown.social_security_employee),
        row("  IRRF", breakdown.income_tax),
        row("  Transport voucher", breakdown.transport_voucher_deduction),
        row("  Other deductions", breakdown.other_deductions),
        row("  Total deductions", breakdown.total_deductions),
        row("Net salary", breakdown.net_salary),
        String::new(),
        "Employer burden".to_string(),
        row("  INSS (employer)", breakdown.employer_social_security),
        row("  FGTS", breakdown.severance_fund),
        row("  RAT", breakdown.accident_insurance),
        row("  Third parties", breakdown.third_party_contributions),
        row("  Total burden", breakdown.total_employer_burden),
        String::new(),
        row("Benefits", breakdown.total_benefits),
        row("Other employer costs", breakdown.total_other_employer_costs),
        row("Total company cost", breakdown.total_company_cost()),
    ];
    lines.join("\n")
}

/// Renders the roster cost report for a reference month.
pub fn roster_report(
    reference: NaiveDate,
    rows: &[(EmployeeRecord, PayrollBreakdown)],
    summary: &RosterSummary,
) -> String {
    let mut lines = vec![
        format!("Payroll roster for {}", reference.format("%Y-%m")),
        String::new(),
        format!(
            "{:<24}{:>16}{:>16}{:>18}",
            "Employee", "Gross", "Net", "Company cost"
        ),
    ];

    for (record, breakdown) in rows {
        lines.push(format!(
            "{:<24}{:>16}{:>16}{:>18}",
            record.name,
            format_brl(breakdown.gross_salary),
            format_brl(breakdown.net_salary),
            format_brl(breakdown.total_company_cost()),
        ));
    }

    lines.push(String::new());
    lines.push(format!("Headcount: {}", summary.headcount));
    lines.push(row("Salaries", summary.salaries));
    lines.push(row("Benefits", summary.benefits));
    lines.push(row("Employer burden", summary.employer_burden));
    lines.push(row("Other costs", summary.other_costs));
    lines.push(row("Total company cost", summary.total_company_cost()));
    lines.push(row("Average per employee", summary.average_cost_per_employee()));

    lines.join("\n")
}

fn row(
    label: &str,
    amount: rust_decimal::Decimal,
) -> String {
    format!("{:<24}{:>18}", label, format_brl(amount))
}

#[cfg(test)]
mod tests {
    use payroll_core::calculations::PayrollWorksheet;
    use payroll_core::{LineItem, PayrollInput, PayrollTable};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn reference_breakdown() -> PayrollBreakdown {
        let table = PayrollTable::brazil_2024();
        PayrollWorksheet::new(&table)
            .calculate(&PayrollInput {
                gross_salary: dec!(3000.00),
                has_transport_voucher: true,
                benefits: vec![
                    LineItem::new("Food", dec!(300.00)),
                    LineItem::new("Basket", dec!(180.00)),
                ],
                other_employer_costs: vec![LineItem::new("Uniforms", dec!(60.00))],
                ..PayrollInput::default()
            })
            .unwrap()
    }

    #[test]
    fn breakdown_report_shows_key_amounts() {
        let report = breakdown_report(&reference_breakdown());

        assert!(report.contains("R$ 3.000,00"), "missing gross: {report}");
        assert!(report.contains("R$ 258,82"), "missing INSS: {report}");
        assert!(report.contains("R$ 2.513,99"), "missing net: {report}");
        assert!(report.contains("R$ 4.614,00"), "missing total: {report}");
    }

    #[test]
    fn breakdown_report_starts_with_title() {
        let report = breakdown_report(&reference_breakdown());

        assert_eq!(report.lines().next(), Some("Payroll breakdown"));
    }

    #[test]
    fn roster_report_lists_employees_and_summary() {
        let breakdown = reference_breakdown();
        let record = EmployeeRecord {
            name: "Ana Souza".to_string(),
            gross_salary: dec!(3000.00),
            transport_voucher: true,
            other_deductions: dec!(0),
        };
        let rows = vec![(record, breakdown)];
        let summary = RosterSummary::from_breakdowns(rows.iter().map(|(_, b)| b));
        let reference = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        let report = roster_report(reference, &rows, &summary);

        assert!(report.starts_with("Payroll roster for 2024-07"));
        assert!(report.contains("Ana Souza"));
        assert!(report.contains("Headcount: 1"));
        assert!(report.contains("R$ 4.614,00"));
    }
}
