//! Table rendering for breakdowns, comparisons and bracket schedules.

use rust_decimal::Decimal;
use salary_core::{
    ComparisonResult, InsuranceConfig, Regime, SalaryBreakdown, TaxDetail, format_currency,
};
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

/// What `calc` prints with `--json`.
#[derive(Debug, Serialize)]
pub struct CalcReport<'a> {
    pub breakdown: &'a SalaryBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<&'a ComparisonResult>,
}

#[derive(Tabled)]
struct AmountRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl AmountRow {
    fn new(
        item: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            item: item.into(),
            amount: format_currency(amount),
        }
    }
}

#[derive(Tabled)]
struct DetailRow {
    #[tabled(rename = "Bracket")]
    bracket: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Taxable")]
    taxable: String,
    #[tabled(rename = "Tax")]
    tax: String,
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Item")]
    item: &'static str,
    #[tabled(rename = "Before 2026")]
    pre_2026: String,
    #[tabled(rename = "From 2026")]
    current: String,
    #[tabled(rename = "Difference")]
    difference: String,
}

impl ComparisonRow {
    fn new(
        item: &'static str,
        pre_2026: Decimal,
        current: Decimal,
        difference: Option<Decimal>,
    ) -> Self {
        Self {
            item,
            pre_2026: format_currency(pre_2026),
            current: format_currency(current),
            difference: difference.map(signed).unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct BracketRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Rate")]
    rate: String,
}

fn signed(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn finish<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

/// `rates` labels the contribution rows and should be the config that
/// produced `breakdown`.
pub fn breakdown_table(
    breakdown: &SalaryBreakdown,
    rates: &InsuranceConfig,
) -> String {
    let insurance = &breakdown.insurance;
    let result = &breakdown.result;

    finish(vec![
        AmountRow::new("Gross salary", breakdown.inputs.gross_salary),
        AmountRow::new("Insurance salary", insurance.insurance_salary),
        AmountRow::new(
            format!("Social insurance ({})", percent(rates.social_rate)),
            insurance.social,
        ),
        AmountRow::new(
            format!("Health insurance ({})", percent(rates.health_rate)),
            insurance.health,
        ),
        AmountRow::new(
            format!("Unemployment insurance ({})", percent(rates.unemployment_rate)),
            insurance.unemployment,
        ),
        AmountRow::new("Total insurance", insurance.total),
        AmountRow::new("Income before tax", breakdown.income_before_tax),
        AmountRow::new("Personal deduction", result.personal_deduction),
        AmountRow::new(
            format!("Dependents deduction ({})", breakdown.inputs.dependents),
            result.dependents_deduction,
        ),
        AmountRow::new("Other deductions", breakdown.inputs.other_deductions),
        AmountRow::new("Total deductions", result.total_deductions),
        AmountRow::new("Taxable income", result.taxable_income),
        AmountRow::new("Personal income tax", result.tax_amount),
        AmountRow::new("Net salary", result.net_salary),
    ])
}

/// `None` when no bracket received income.
pub fn details_table(details: &[TaxDetail]) -> Option<String> {
    if details.is_empty() {
        return None;
    }

    let rows = details
        .iter()
        .map(|detail| DetailRow {
            bracket: detail.range_label.clone(),
            rate: detail.rate_label(),
            taxable: format_currency(detail.taxable_amount),
            tax: format_currency(detail.tax),
        })
        .collect();
    Some(finish(rows))
}

pub fn comparison_table(comparison: &ComparisonResult) -> String {
    let pre = &comparison.pre_2026;
    let cur = &comparison.current;
    let diff = &comparison.difference;

    finish(vec![
        ComparisonRow::new(
            "Personal deduction",
            pre.personal_deduction,
            cur.personal_deduction,
            None,
        ),
        ComparisonRow::new(
            "Dependents deduction",
            pre.dependents_deduction,
            cur.dependents_deduction,
            None,
        ),
        ComparisonRow::new(
            "Total deductions",
            pre.total_deductions,
            cur.total_deductions,
            Some(diff.deductions),
        ),
        ComparisonRow::new(
            "Taxable income",
            pre.taxable_income,
            cur.taxable_income,
            Some(diff.taxable_income),
        ),
        ComparisonRow::new(
            "Personal income tax",
            pre.tax_amount,
            cur.tax_amount,
            Some(-diff.tax_saved),
        ),
        ComparisonRow::new(
            "Net salary",
            pre.net_salary,
            cur.net_salary,
            Some(diff.net_salary_gain),
        ),
    ])
}

/// One-line verdict under the comparison table.
pub fn comparison_summary(comparison: &ComparisonResult) -> String {
    let gain = comparison.difference.net_salary_gain;
    if gain > Decimal::ZERO {
        format!(
            "The 2026 rules save {} in tax; net salary rises by {}.",
            format_currency(comparison.difference.tax_saved),
            format_currency(gain)
        )
    } else if gain < Decimal::ZERO {
        format!(
            "The 2026 rules cost {} more; net salary falls by {}.",
            format_currency(-comparison.difference.tax_saved),
            format_currency(-gain)
        )
    } else {
        "Both regimes give the same net salary.".to_string()
    }
}

pub fn brackets_table(regime: Regime) -> String {
    let mut previous = Decimal::ZERO;
    let rows = regime
        .brackets()
        .iter()
        .enumerate()
        .map(|(i, bracket)| {
            let from = format_currency(previous);
            let to = match bracket.upper_bound {
                Some(upper) => {
                    previous = upper;
                    format_currency(upper)
                }
                None => "∞".to_string(),
            };
            BracketRow {
                index: i + 1,
                from,
                to,
                rate: percent(bracket.rate),
            }
        })
        .collect();
    finish(rows)
}
