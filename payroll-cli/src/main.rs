use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use payroll_core::calculations::{PayrollWorksheet, RosterSummary};
use payroll_core::{LineItem, PayrollInput, PayrollTable};
use payroll_data::PayrollTableLoader;
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod report;
mod roster;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Payroll cost reports over the Brazilian bracket tables.
///
/// Computes employee-side deductions (INSS, IRRF, transport voucher),
/// employer-side burden and total company cost, for a single salary or
/// for a whole roster CSV.
#[derive(Debug, Parser)]
#[command(name = "payroll")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Replacement contribution-bracket CSV
    /// (columns: reference_year,upper_bound,rate).
    #[arg(long, global = true)]
    contribution_csv: Option<PathBuf>,

    /// Replacement withholding-bracket CSV
    /// (columns: reference_year,upper_bound,rate,flat_deduction).
    #[arg(long, global = true)]
    withholding_csv: Option<PathBuf>,

    /// Reference year to pick from the replacement CSVs.
    #[arg(long, global = true, default_value_t = 2024)]
    year: i32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Break down the payroll cost of a single salary.
    Breakdown {
        /// Monthly gross salary.
        #[arg(long)]
        salary: Decimal,

        /// Apply the transport-voucher deduction.
        #[arg(long, default_value_t = false)]
        transport_voucher: bool,

        /// Flat additional employee-side deduction.
        #[arg(long, default_value = "0")]
        other_deductions: Decimal,

        /// Benefit line item as NAME=AMOUNT; repeatable.
        #[arg(long = "benefit", value_parser = parse_line_item)]
        benefits: Vec<LineItem>,

        /// Employer cost line item as NAME=AMOUNT; repeatable.
        #[arg(long = "employer-cost", value_parser = parse_line_item)]
        employer_costs: Vec<LineItem>,
    },

    /// Compute the cost report for a roster CSV.
    Roster {
        /// Roster CSV with columns
        /// name,gross_salary,transport_voucher,other_deductions.
        #[arg(short, long)]
        file: PathBuf,

        /// Reference month as YYYY-MM (defaults to the current month).
        #[arg(long)]
        reference: Option<String>,
    },
}

fn parse_line_item(raw: &str) -> Result<LineItem, String> {
    let (name, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=AMOUNT, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty name in line item '{raw}'"));
    }
    let amount: Decimal = amount
        .trim()
        .parse()
        .map_err(|err| format!("invalid amount in '{raw}': {err}"))?;
    Ok(LineItem::new(name, amount))
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep report output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── table selection ─────────────────────────────────────────────────────────

/// Built-in 2024 table, or the replacement CSVs when both are given.
fn load_table(cli: &Cli) -> Result<PayrollTable> {
    let base = PayrollTable::brazil_2024();

    match (&cli.contribution_csv, &cli.withholding_csv) {
        (None, None) => Ok(base),
        (Some(contribution_path), Some(withholding_path)) => {
            let contribution_file = File::open(contribution_path)
                .with_context(|| format!("Failed to open: {}", contribution_path.display()))?;
            let contributions = PayrollTableLoader::parse_contributions(contribution_file)
                .with_context(|| format!("Failed to parse CSV: {}", contribution_path.display()))?;

            let withholding_file = File::open(withholding_path)
                .with_context(|| format!("Failed to open: {}", withholding_path.display()))?;
            let withholdings = PayrollTableLoader::parse_withholdings(withholding_file)
                .with_context(|| format!("Failed to parse CSV: {}", withholding_path.display()))?;

            let table = PayrollTableLoader::apply(&base, cli.year, &contributions, &withholdings)?;
            debug!(year = cli.year, "using replacement bracket tables");
            Ok(table)
        }
        _ => bail!("--contribution-csv and --withholding-csv must be given together"),
    }
}

/// First day of the requested `YYYY-MM` month, or of the current month.
fn resolve_reference(reference: Option<&str>) -> Result<NaiveDate> {
    match reference {
        Some(raw) => NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
            .with_context(|| format!("invalid reference month '{raw}', expected YYYY-MM")),
        None => Local::now()
            .date_naive()
            .with_day(1)
            .context("failed to normalise the current month"),
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let table = load_table(&cli)?;
    let worksheet = PayrollWorksheet::new(&table);

    match &cli.command {
        Command::Breakdown {
            salary,
            transport_voucher,
            other_deductions,
            benefits,
            employer_costs,
        } => {
            let input = PayrollInput {
                gross_salary: *salary,
                has_transport_voucher: *transport_voucher,
                other_deductions: *other_deductions,
                benefits: benefits.clone(),
                other_employer_costs: employer_costs.clone(),
            };
            let breakdown = worksheet.calculate(&input)?;
            println!("{}", report::breakdown_report(&breakdown));
        }

        Command::Roster { file, reference } => {
            let reference = resolve_reference(reference.as_deref())?;
            let roster_file = File::open(file)
                .with_context(|| format!("Failed to open: {}", file.display()))?;
            let records = roster::read_roster(roster_file)
                .with_context(|| format!("Failed to parse roster CSV: {}", file.display()))?;

            info!(employees = records.len(), "computing roster breakdowns");

            let mut rows = Vec::with_capacity(records.len());
            for record in records {
                let breakdown = worksheet
                    .calculate(&record.to_input())
                    .with_context(|| format!("failed to compute breakdown for '{}'", record.name))?;
                rows.push((record, breakdown));
            }

            let summary = RosterSummary::from_breakdowns(rows.iter().map(|(_, b)| b));
            println!("{}", report::roster_report(reference, &rows, &summary));
        }
    }

    Ok(())
}
