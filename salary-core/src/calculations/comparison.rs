//! Side-by-side comparison of the pre-2026 and 2026 regimes.
//!
//! The comparison always contrasts the two fixed regimes; it does not
//! consult the clock. Insurance is computed once and shared.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::SalaryInputs;
//! use salary_core::calculations::compare_regimes;
//!
//! let comparison = compare_regimes(&SalaryInputs::new(dec!(20000000), 0, dec!(0)));
//!
//! assert_eq!(comparison.pre_2026.tax_amount, dec!(440000));
//! assert_eq!(comparison.current.tax_amount, dec!(120000));
//! assert_eq!(comparison.difference.tax_saved, dec!(320000));
//! assert_eq!(comparison.difference.net_salary_gain, dec!(320000));
//! ```

use crate::calculations::{InsuranceCalculator, NetSalaryCalculator};
use crate::{ComparisonDifference, ComparisonResult, Regime, RegimeResult, SalaryInputs};

#[derive(Debug, Clone, Default)]
pub struct RegimeComparator {
    insurance: InsuranceCalculator,
}

impl RegimeComparator {
    pub fn new(insurance: InsuranceCalculator) -> Self {
        Self { insurance }
    }

    pub fn compare(
        &self,
        inputs: &SalaryInputs,
    ) -> ComparisonResult {
        let insurance = self.insurance.calculate(inputs.gross_salary);

        let pre_2026 = NetSalaryCalculator::with_insurance(Regime::Pre2026, self.insurance.clone())
            .regime_result(inputs, &insurance);
        let current = NetSalaryCalculator::with_insurance(Regime::Current, self.insurance.clone())
            .regime_result(inputs, &insurance);

        let difference = difference(&pre_2026, &current);

        ComparisonResult {
            pre_2026,
            current,
            difference,
        }
    }
}

/// Compares both regimes with the statutory insurance rules.
pub fn compare_regimes(inputs: &SalaryInputs) -> ComparisonResult {
    RegimeComparator::default().compare(inputs)
}

fn difference(
    pre_2026: &RegimeResult,
    current: &RegimeResult,
) -> ComparisonDifference {
    ComparisonDifference {
        deductions: current.total_deductions - pre_2026.total_deductions,
        taxable_income: current.taxable_income - pre_2026.taxable_income,
        tax_saved: pre_2026.tax_amount - current.tax_amount,
        net_salary_gain: current.net_salary - pre_2026.net_salary,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn compare_single_earner() {
        let result = compare_regimes(&SalaryInputs::new(dec!(20000000), 0, dec!(0)));

        assert_eq!(
            result.pre_2026,
            RegimeResult {
                personal_deduction: dec!(11000000),
                dependents_deduction: dec!(0),
                total_deductions: dec!(11000000),
                taxable_income: dec!(6900000),
                tax_amount: dec!(440000),
                net_salary: dec!(17460000),
            }
        );
        assert_eq!(
            result.current,
            RegimeResult {
                personal_deduction: dec!(15500000),
                dependents_deduction: dec!(0),
                total_deductions: dec!(15500000),
                taxable_income: dec!(2400000),
                tax_amount: dec!(120000),
                net_salary: dec!(17780000),
            }
        );
        assert_eq!(
            result.difference,
            ComparisonDifference {
                deductions: dec!(4500000),
                taxable_income: dec!(-4500000),
                tax_saved: dec!(320000),
                net_salary_gain: dec!(320000),
            }
        );
    }

    #[test]
    fn compare_with_dependents_above_cap() {
        let result = compare_regimes(&SalaryInputs::new(dec!(50000000), 2, dec!(0)));

        assert_eq!(result.pre_2026.tax_amount, dec!(3407200));
        assert_eq!(result.current.tax_amount, dec!(1218600));
        assert_eq!(result.difference.deductions, dec!(8100000));
        assert_eq!(result.difference.tax_saved, dec!(2188600));
        assert_eq!(result.difference.net_salary_gain, dec!(2188600));
    }

    #[test]
    fn compare_zero_income_has_no_differences_in_tax() {
        let result = compare_regimes(&SalaryInputs::default());

        assert_eq!(result.pre_2026.tax_amount, dec!(0));
        assert_eq!(result.current.tax_amount, dec!(0));
        assert_eq!(result.difference.tax_saved, dec!(0));
        assert_eq!(result.difference.taxable_income, dec!(0));
        assert_eq!(result.difference.deductions, dec!(4500000));
    }

    #[test]
    fn other_deductions_apply_to_both_regimes() {
        let result = compare_regimes(&SalaryInputs::new(dec!(30000000), 0, dec!(3000000)));

        assert_eq!(result.pre_2026.total_deductions, dec!(14000000));
        assert_eq!(result.current.total_deductions, dec!(18500000));
    }
}
