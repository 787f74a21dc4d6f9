use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use salary_core::Regime;

/// Monthly salary and personal income tax calculator.
///
/// Computes insurance, family deductions, progressive income tax and net
/// salary under the rules in force on the given date, and compares the
/// pre-2026 and 2026 regimes.
#[derive(Debug, Parser)]
#[command(name = "salary", version, about, long_about = None)]
pub struct Cli {
    /// Evaluate as if today were this date (YYYY-MM-DD) instead of the system clock.
    #[arg(long, global = true, value_parser = parse_as_of)]
    pub as_of: Option<NaiveDateTime>,

    /// Print JSON instead of tables.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate net salary for one set of inputs.
    Calc {
        #[command(flatten)]
        inputs: InputArgs,

        /// Also show the pre-2026 vs 2026 comparison.
        #[arg(short, long, default_value_t = false)]
        compare: bool,
    },

    /// Compare the pre-2026 and 2026 regimes for one set of inputs.
    Compare {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Print the bracket schedules.
    Brackets {
        /// Only this regime (pre2026 or current).
        #[arg(short, long, value_parser = parse_regime)]
        regime: Option<Regime>,
    },

    /// Evaluate every row of a CSV file and write results as CSV to stdout.
    Batch {
        /// CSV with columns gross_salary, dependents, other_deductions.
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Read commands from stdin and keep the inputs between them.
    Interactive,
}

/// Salary inputs. Amounts accept `,` or `_` as thousands separators;
/// unparseable values count as 0.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Gross monthly salary.
    #[arg(short, long)]
    pub gross: String,

    /// Number of registered dependents.
    #[arg(short, long, default_value = "0")]
    pub dependents: String,

    /// Other deductible amounts (charity, voluntary pension, ...).
    #[arg(short, long, default_value = "0")]
    pub other_deductions: String,
}

fn parse_as_of(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_regime(s: &str) -> Result<Regime, String> {
    Regime::parse(s).ok_or_else(|| format!("unknown regime '{s}', expected pre2026 or current"))
}
