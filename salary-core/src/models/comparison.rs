use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The deduction-to-net pipeline outcome under one regime.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegimeResult {
    pub personal_deduction: Decimal,
    pub dependents_deduction: Decimal,
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    pub tax_amount: Decimal,
    pub net_salary: Decimal,
}

/// Signed deltas between the two regimes.
///
/// `tax_saved` and `net_salary_gain` are positive when the 2026 rules favour
/// the employee. `deductions` and `taxable_income` are plain `current - pre`
/// differences, so a positive `taxable_income` delta means more income is
/// taxed under the 2026 rules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparisonDifference {
    /// `current.total_deductions - pre_2026.total_deductions`
    pub deductions: Decimal,
    /// `current.taxable_income - pre_2026.taxable_income`
    pub taxable_income: Decimal,
    /// `pre_2026.tax_amount - current.tax_amount`
    pub tax_saved: Decimal,
    /// `current.net_salary - pre_2026.net_salary`
    pub net_salary_gain: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub pre_2026: RegimeResult,
    pub current: RegimeResult,
    pub difference: ComparisonDifference,
}
