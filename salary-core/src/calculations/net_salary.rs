//! Deductions, taxable income and net salary under one regime.
//!
//! # Pipeline
//!
//! | Step | Quantity | Formula |
//! |------|----------|---------|
//! | 1 | Insurance | see [`InsuranceCalculator`] |
//! | 2 | Income before tax | `max(0, gross - insurance)` |
//! | 3 | Total deductions | `personal + dependents × per_dependent + other`, saturating |
//! | 4 | Taxable income | `max(0, income_before_tax - total_deductions)` |
//! | 5 | Tax | progressive schedule of the regime |
//! | 6 | Net salary | `gross - insurance - tax` |
//!
//! Net salary is deliberately not floored at zero, unlike steps 2 and 4.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::{Regime, SalaryInputs};
//! use salary_core::calculations::NetSalaryCalculator;
//!
//! let calculator = NetSalaryCalculator::new(Regime::Current);
//! let breakdown = calculator.breakdown(&SalaryInputs::new(dec!(20000000), 0, dec!(0)));
//!
//! assert_eq!(breakdown.insurance.total, dec!(2100000));
//! assert_eq!(breakdown.result.taxable_income, dec!(2400000));
//! assert_eq!(breakdown.result.tax_amount, dec!(120000));
//! assert_eq!(breakdown.net_salary(), dec!(17780000));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::max;
use crate::calculations::{InsuranceCalculator, ProgressiveTaxCalculator};
use crate::{InsuranceBreakdown, Regime, RegimeResult, SalaryBreakdown, SalaryInputs, TaxDetail};

/// Gross salary after insurance, never below zero.
pub fn income_before_tax(
    gross_salary: Decimal,
    total_insurance: Decimal,
) -> Decimal {
    max(gross_salary - total_insurance, Decimal::ZERO)
}

/// Take-home pay. Not clamped.
pub fn net_salary(
    gross_salary: Decimal,
    total_insurance: Decimal,
    tax_amount: Decimal,
) -> Decimal {
    gross_salary - total_insurance - tax_amount
}

/// Runs the full salary pipeline with one regime's constants and schedule.
#[derive(Debug, Clone)]
pub struct NetSalaryCalculator {
    regime: Regime,
    insurance: InsuranceCalculator,
}

impl NetSalaryCalculator {
    /// Calculator for `regime` with the statutory insurance rules.
    pub fn new(regime: Regime) -> Self {
        Self::with_insurance(regime, InsuranceCalculator::default())
    }

    pub fn with_insurance(
        regime: Regime,
        insurance: InsuranceCalculator,
    ) -> Self {
        Self { regime, insurance }
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn insurance_calculator(&self) -> &InsuranceCalculator {
        &self.insurance
    }

    pub fn personal_deduction(&self) -> Decimal {
        self.regime.constants().personal_deduction
    }

    pub fn dependents_deduction(
        &self,
        dependents: u32,
    ) -> Decimal {
        Decimal::from(dependents) * self.regime.constants().dependent_deduction
    }

    /// Sum of all deductions, saturating at [`Decimal::MAX`].
    pub fn total_deductions(
        &self,
        inputs: &SalaryInputs,
    ) -> Decimal {
        self.personal_deduction()
            .saturating_add(self.dependents_deduction(inputs.dependents))
            .saturating_add(inputs.other_deductions)
    }

    pub fn taxable_income(
        &self,
        income_before_tax: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        max(income_before_tax - total_deductions, Decimal::ZERO)
    }

    pub fn tax_calculator(&self) -> ProgressiveTaxCalculator<'static> {
        ProgressiveTaxCalculator::for_regime(self.regime)
    }

    pub fn tax_details(
        &self,
        taxable_income: Decimal,
    ) -> Vec<TaxDetail> {
        self.tax_calculator().tax_details(taxable_income)
    }

    /// Deductions through net salary, given insurance computed elsewhere.
    ///
    /// Insurance does not depend on the regime, so the comparator computes it
    /// once and passes it to both regimes.
    pub fn regime_result(
        &self,
        inputs: &SalaryInputs,
        insurance: &InsuranceBreakdown,
    ) -> RegimeResult {
        let personal_deduction = self.personal_deduction();
        let dependents_deduction = self.dependents_deduction(inputs.dependents);
        let total_deductions = self.total_deductions(inputs);

        let income_before_tax = income_before_tax(inputs.gross_salary, insurance.total);
        let taxable_income = self.taxable_income(income_before_tax, total_deductions);
        let tax_amount = self.tax_calculator().calculate_tax(taxable_income);
        let net_salary = net_salary(inputs.gross_salary, insurance.total, tax_amount);

        debug!(
            regime = self.regime.as_str(),
            %taxable_income,
            %tax_amount,
            %net_salary,
            "regime result"
        );

        RegimeResult {
            personal_deduction,
            dependents_deduction,
            total_deductions,
            taxable_income,
            tax_amount,
            net_salary,
        }
    }

    /// Every figure for `inputs` in one pass.
    pub fn breakdown(
        &self,
        inputs: &SalaryInputs,
    ) -> SalaryBreakdown {
        let insurance = self.insurance.calculate(inputs.gross_salary);
        let result = self.regime_result(inputs, &insurance);
        let tax_details = self.tax_details(result.taxable_income);

        SalaryBreakdown {
            regime: self.regime,
            inputs: inputs.clone(),
            income_before_tax: income_before_tax(inputs.gross_salary, insurance.total),
            insurance,
            result,
            tax_details,
        }
    }
}
