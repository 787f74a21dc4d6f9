//! CSV batch mode: one salary scenario per input row, one result per output row.
//!
//! Input columns: `gross_salary`, `dependents`, `other_deductions`. The
//! last two may be left empty. Values go through the same clamping as the
//! interactive setters, so a malformed amount becomes 0 rather than an error.

use std::io::{Read, Write};

use rust_decimal::Decimal;
use salary_core::{Clock, SalaryStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::parse::parse_lenient_amount;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// A single input row, kept as text so bad cells can be clamped.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BatchRecord {
    pub gross_salary: String,
    #[serde(default)]
    pub dependents: Option<String>,
    #[serde(default)]
    pub other_deductions: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchResult {
    pub gross_salary: Decimal,
    pub dependents: u32,
    pub other_deductions: Decimal,
    pub regime: &'static str,
    pub total_insurance: Decimal,
    pub taxable_income: Decimal,
    pub tax_amount: Decimal,
    pub net_salary: Decimal,
    pub pre_2026_tax: Decimal,
    pub current_tax: Decimal,
    pub tax_saved: Decimal,
    pub net_salary_gain: Decimal,
}

fn optional_amount(cell: Option<&str>) -> Option<Decimal> {
    cell.and_then(parse_lenient_amount)
}

/// Evaluates one record with the store's clock.
pub fn evaluate<C: Clock>(
    store: &mut SalaryStore<C>,
    record: &BatchRecord,
) -> BatchResult {
    store.reset();
    store.set_gross_salary(parse_lenient_amount(&record.gross_salary));
    store.set_dependents(optional_amount(record.dependents.as_deref()));
    store.set_other_deductions(optional_amount(record.other_deductions.as_deref()));

    let breakdown = store.breakdown();
    let comparison = store.comparison();

    BatchResult {
        gross_salary: store.gross_salary(),
        dependents: store.dependents(),
        other_deductions: store.other_deductions(),
        regime: breakdown.regime.as_str(),
        total_insurance: breakdown.insurance.total,
        taxable_income: breakdown.result.taxable_income,
        tax_amount: breakdown.result.tax_amount,
        net_salary: breakdown.result.net_salary,
        pre_2026_tax: comparison.pre_2026.tax_amount,
        current_tax: comparison.current.tax_amount,
        tax_saved: comparison.difference.tax_saved,
        net_salary_gain: comparison.difference.net_salary_gain,
    }
}

/// Reads every record from `input` and writes a result row per record.
///
/// Returns the number of rows written.
pub fn run_batch<C, R, W>(
    store: &mut SalaryStore<C>,
    input: R,
    output: W,
) -> Result<usize, BatchError>
where
    C: Clock,
    R: Read,
    W: Write,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    let mut count = 0;

    for record in reader.deserialize::<BatchRecord>() {
        let record = record?;
        writer.serialize(evaluate(store, &record))?;
        count += 1;
    }
    writer.flush()?;

    info!(rows = count, "batch complete");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use salary_core::FixedClock;

    use super::*;

    fn store() -> SalaryStore<FixedClock> {
        let now = NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        SalaryStore::with_clock(FixedClock(now))
    }

    #[test]
    fn evaluate_fills_every_column() {
        let record = BatchRecord {
            gross_salary: "50,000,000".to_string(),
            dependents: Some("2".to_string()),
            other_deductions: None,
        };

        let result = evaluate(&mut store(), &record);

        assert_eq!(
            result,
            BatchResult {
                gross_salary: dec!(50000000),
                dependents: 2,
                other_deductions: dec!(0),
                regime: "current",
                total_insurance: dec!(4914000),
                taxable_income: dec!(17186000),
                tax_amount: dec!(1218600),
                net_salary: dec!(43867400),
                pre_2026_tax: dec!(3407200),
                current_tax: dec!(1218600),
                tax_saved: dec!(2188600),
                net_salary_gain: dec!(2188600),
            }
        );
    }

    #[test]
    fn evaluate_does_not_leak_previous_row() {
        let mut store = store();
        let first = BatchRecord {
            gross_salary: "30000000".to_string(),
            dependents: Some("3".to_string()),
            other_deductions: Some("1000000".to_string()),
        };
        let second = BatchRecord {
            gross_salary: "20000000".to_string(),
            dependents: None,
            other_deductions: None,
        };

        evaluate(&mut store, &first);
        let result = evaluate(&mut store, &second);

        assert_eq!(result.dependents, 0);
        assert_eq!(result.other_deductions, dec!(0));
        assert_eq!(result.net_salary, dec!(17780000));
    }

    #[test]
    fn run_batch_writes_one_row_per_record() {
        let input = "gross_salary,dependents,other_deductions\n\
                     20000000,,\n\
                     50000000,2,\n\
                     oops,-1,abc\n";
        let mut output = Vec::new();

        let count = run_batch(&mut store(), input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(count, 3);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("gross_salary,dependents,other_deductions,regime"));
        assert!(lines[1].contains("17780000"));
        assert!(lines[2].contains("43867400"));
        assert!(lines[3].starts_with("0,0,0,current"));
    }

    #[test]
    fn run_batch_rejects_missing_column() {
        let input = "salary\n20000000\n";
        let mut output = Vec::new();

        let result = run_batch(&mut store(), input.as_bytes(), &mut output);

        assert!(matches!(result, Err(BatchError::Csv(_))));
    }
}
