//! Command dispatch, kept apart from `main` so it can run against in-memory
//! input and output.

use std::fs::File;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use salary_core::{Clock, Regime, SalaryStore};
use tracing::{debug, info};

use crate::batch;
use crate::cli::{Cli, Command, InputArgs};
use crate::parse::parse_lenient_amount;
use crate::render::{self, CalcReport};
use crate::session::Session;

fn load_inputs<C: Clock>(
    store: &mut SalaryStore<C>,
    inputs: &InputArgs,
) {
    store.set_gross_salary(parse_lenient_amount(&inputs.gross));
    store.set_dependents(parse_lenient_amount(&inputs.dependents));
    store.set_other_deductions(parse_lenient_amount(&inputs.other_deductions));
}

fn write_json<W: Write, T: serde::Serialize>(
    out: &mut W,
    value: &T,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to encode JSON")?;
    writeln!(out)?;
    Ok(())
}

/// Runs the parsed command line against `clock`.
pub fn run<C, R, W>(
    cli: &Cli,
    clock: C,
    input: R,
    mut out: W,
) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    let mut store = SalaryStore::with_clock(clock);
    debug!(now = %store.now(), regime = store.regime().as_str(), "clock");

    match &cli.command {
        Command::Calc { inputs, compare } => {
            load_inputs(&mut store, inputs);
            store.set_show_comparison(*compare);

            let breakdown = store.breakdown();
            let comparison = store.show_comparison().then(|| store.comparison());
            info!(
                gross = %store.gross_salary(),
                net = %breakdown.net_salary(),
                "calculated"
            );

            if cli.json {
                let report = CalcReport {
                    breakdown: &breakdown,
                    comparison: comparison.as_ref(),
                };
                write_json(&mut out, &report)?;
            } else {
                writeln!(out, "{}", breakdown.regime)?;
                writeln!(out, "{}", render::breakdown_table(&breakdown, store.insurance_config()))?;
                if let Some(details) = render::details_table(&breakdown.tax_details) {
                    writeln!(out, "{details}")?;
                }
                if let Some(comparison) = &comparison {
                    writeln!(out, "{}", render::comparison_table(comparison))?;
                    writeln!(out, "{}", render::comparison_summary(comparison))?;
                }
            }
        }
        Command::Compare { inputs } => {
            load_inputs(&mut store, inputs);
            let comparison = store.comparison();

            if cli.json {
                write_json(&mut out, &comparison)?;
            } else {
                writeln!(out, "{}", render::comparison_table(&comparison))?;
                writeln!(out, "{}", render::comparison_summary(&comparison))?;
            }
        }
        Command::Brackets { regime } => {
            let regimes: Vec<Regime> = match regime {
                Some(regime) => vec![*regime],
                None => Regime::all().to_vec(),
            };

            if cli.json {
                let tables: Vec<_> = regimes
                    .iter()
                    .map(|r| serde_json::json!({ "regime": r, "brackets": r.brackets() }))
                    .collect();
                write_json(&mut out, &tables)?;
            } else {
                for regime in regimes {
                    let marker = if regime == store.regime() { " (active)" } else { "" };
                    writeln!(out, "{regime}{marker}")?;
                    writeln!(out, "{}", render::brackets_table(regime))?;
                }
            }
        }
        Command::Batch { file } => {
            let reader = File::open(file)
                .with_context(|| format!("Failed to open: {}", file.display()))?;
            batch::run_batch(&mut store, reader, &mut out)
                .with_context(|| format!("Failed to process batch: {}", file.display()))?;
        }
        Command::Interactive => {
            Session::new(store).run(input, &mut out)?;
        }
    }

    out.flush().context("failed to flush output")
}
