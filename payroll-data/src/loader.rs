//! CSV loading of replacement bracket tables.
//!
//! Bracket schedules change every year; the built-in
//! [`PayrollTable::brazil_2024`] constants can be swapped for tables kept
//! in two CSV files, one per schedule:
//!
//! - contribution CSV: `reference_year,upper_bound,rate`
//! - withholding CSV: `reference_year,upper_bound,rate,flat_deduction`
//!
//! An empty `upper_bound` marks an open-ended row. Files may mix several
//! years; [`PayrollTableLoader::apply`] picks the rows for the requested
//! year.

use std::io::Read;

use payroll_core::{ContributionBracket, PayrollTable, WithholdingBracket};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading bracket data.
#[derive(Debug, Error)]
pub enum TableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("no contribution brackets for year {0} in the data set")]
    MissingContributionYear(i32),

    #[error("no withholding brackets for year {0} in the data set")]
    MissingWithholdingYear(i32),
}

impl From<csv::Error> for TableLoaderError {
    fn from(err: csv::Error) -> Self {
        TableLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the contribution-bracket CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ContributionBracketRecord {
    pub reference_year: i32,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// A single record from the withholding-bracket CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WithholdingBracketRecord {
    pub reference_year: i32,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub flat_deduction: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket schedules kept in CSV files.
pub struct PayrollTableLoader;

impl PayrollTableLoader {
    /// Parses contribution-bracket records from a CSV reader.
    pub fn parse_contributions<R: Read>(
        reader: R
    ) -> Result<Vec<ContributionBracketRecord>, TableLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: ContributionBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parses withholding-bracket records from a CSV reader.
    pub fn parse_withholdings<R: Read>(
        reader: R
    ) -> Result<Vec<WithholdingBracketRecord>, TableLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: WithholdingBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Replaces the bracket schedules of `base` with the records for the
    /// requested year.
    ///
    /// Rows are sorted ascending by upper bound with open-ended rows
    /// last, so file order does not matter. The contribution ceiling is
    /// taken from the highest closed contribution bound (the schedules
    /// published every year end exactly at the ceiling); the transport
    /// voucher rate and employer rates of `base` are kept.
    ///
    /// # Errors
    ///
    /// Returns [`TableLoaderError`] if either schedule has no rows for
    /// the year.
    pub fn apply(
        base: &PayrollTable,
        reference_year: i32,
        contributions: &[ContributionBracketRecord],
        withholdings: &[WithholdingBracketRecord],
    ) -> Result<PayrollTable, TableLoaderError> {
        let mut contribution_brackets: Vec<ContributionBracket> = contributions
            .iter()
            .filter(|record| record.reference_year == reference_year)
            .map(|record| ContributionBracket {
                upper_bound: record.upper_bound,
                rate: record.rate,
            })
            .collect();
        if contribution_brackets.is_empty() {
            return Err(TableLoaderError::MissingContributionYear(reference_year));
        }

        let mut withholding_brackets: Vec<WithholdingBracket> = withholdings
            .iter()
            .filter(|record| record.reference_year == reference_year)
            .map(|record| WithholdingBracket {
                upper_bound: record.upper_bound,
                rate: record.rate,
                flat_deduction: record.flat_deduction,
            })
            .collect();
        if withholding_brackets.is_empty() {
            return Err(TableLoaderError::MissingWithholdingYear(reference_year));
        }

        sort_by_upper_bound(&mut contribution_brackets, |bracket| bracket.upper_bound);
        sort_by_upper_bound(&mut withholding_brackets, |bracket| bracket.upper_bound);

        let contribution_ceiling = contribution_brackets
            .iter()
            .filter_map(|bracket| bracket.upper_bound)
            .max()
            .unwrap_or(base.contribution_ceiling);

        Ok(PayrollTable {
            reference_year,
            contribution_ceiling,
            contribution_brackets,
            withholding_brackets,
            ..base.clone()
        })
    }
}

/// Ascending by bound, open-ended rows last.
fn sort_by_upper_bound<T>(
    brackets: &mut [T],
    bound: impl Fn(&T) -> Option<Decimal>,
) {
    brackets.sort_by_key(|bracket| {
        let upper = bound(bracket);
        (upper.is_none(), upper.unwrap_or_default())
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const CONTRIBUTIONS_CSV: &str = "\
reference_year,upper_bound,rate
2025,1518.00,0.075
2025,2793.88,0.09
2025,4190.83,0.12
2025,8157.41,0.14
2024,1412.00,0.075
";

    const WITHHOLDINGS_CSV: &str = "\
reference_year,upper_bound,rate,flat_deduction
2025,2259.20,0,0
2025,2826.65,0.075,169.44
2025,,0.275,896.00
";

    #[test]
    fn parse_contributions_reads_all_rows() {
        let records =
            PayrollTableLoader::parse_contributions(CONTRIBUTIONS_CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 5);
        assert_eq!(
            records[0],
            ContributionBracketRecord {
                reference_year: 2025,
                upper_bound: Some(dec!(1518.00)),
                rate: dec!(0.075),
            }
        );
    }

    #[test]
    fn parse_withholdings_reads_empty_bound_as_open_ended() {
        let records =
            PayrollTableLoader::parse_withholdings(WITHHOLDINGS_CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[2].upper_bound, None);
        assert_eq!(records[2].flat_deduction, dec!(896.00));
    }

    #[test]
    fn parse_rejects_malformed_decimal() {
        let csv = "reference_year,upper_bound,rate\n2025,abc,0.075\n";

        let result = PayrollTableLoader::parse_contributions(csv.as_bytes());

        assert!(matches!(result, Err(TableLoaderError::CsvParse(_))));
    }

    #[test]
    fn apply_filters_by_year_and_sorts() {
        let contributions =
            PayrollTableLoader::parse_contributions(CONTRIBUTIONS_CSV.as_bytes()).unwrap();
        let withholdings =
            PayrollTableLoader::parse_withholdings(WITHHOLDINGS_CSV.as_bytes()).unwrap();
        let base = PayrollTable::brazil_2024();

        let table =
            PayrollTableLoader::apply(&base, 2025, &contributions, &withholdings).unwrap();

        assert_eq!(table.reference_year, 2025);
        assert_eq!(table.contribution_brackets.len(), 4);
        assert_eq!(
            table.contribution_brackets[0].upper_bound,
            Some(dec!(1518.00))
        );
        assert_eq!(table.withholding_brackets.len(), 3);
        assert_eq!(table.withholding_brackets[2].upper_bound, None);
        // ceiling follows the highest closed bound; rates come from base
        assert_eq!(table.contribution_ceiling, dec!(8157.41));
        assert_eq!(table.employer_rates, base.employer_rates);
    }

    #[test]
    fn apply_errors_when_year_has_no_contribution_rows() {
        let withholdings =
            PayrollTableLoader::parse_withholdings(WITHHOLDINGS_CSV.as_bytes()).unwrap();
        let base = PayrollTable::brazil_2024();

        let result = PayrollTableLoader::apply(&base, 2023, &[], &withholdings);

        assert!(matches!(
            result,
            Err(TableLoaderError::MissingContributionYear(2023))
        ));
    }

    #[test]
    fn apply_errors_when_year_has_no_withholding_rows() {
        let contributions =
            PayrollTableLoader::parse_contributions(CONTRIBUTIONS_CSV.as_bytes()).unwrap();
        let base = PayrollTable::brazil_2024();

        let result = PayrollTableLoader::apply(&base, 2024, &contributions, &[]);

        assert!(matches!(
            result,
            Err(TableLoaderError::MissingWithholdingYear(2024))
        ));
    }
}
