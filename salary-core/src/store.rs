//! Stateful front for the calculators.
//!
//! [`SalaryStore`] holds the three user inputs and the comparison toggle.
//! Every other figure is recomputed from them on each read, with the
//! regime chosen by the store's [`Clock`].

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use tracing::warn;

use crate::calculations::{
    InsuranceCalculator, InsuranceConfigError, NetSalaryCalculator, RegimeComparator, is_current_regime_active,
    select_bracket_table, select_deduction_constants,
};
use crate::clock::{Clock, SystemClock};
use crate::{
    ComparisonResult, InsuranceConfig, Regime, RegimeConstants, SalaryBreakdown, SalaryInputs, TaxBracket,
    TaxDetail,
};

/// Converts a float to an amount, mapping NaN and infinities to `None`.
pub fn amount_from_f64(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Missing or negative amounts become zero.
pub fn clamp_amount(value: Option<Decimal>) -> Decimal {
    match value {
        Some(v) if v < Decimal::ZERO => {
            warn!(value = %v, "negative amount clamped to 0");
            Decimal::ZERO
        }
        Some(v) => v,
        None => Decimal::ZERO,
    }
}

/// Floors to a whole count; missing or negative input becomes zero and
/// counts beyond `u32::MAX` saturate.
pub fn clamp_count(value: Option<Decimal>) -> u32 {
    let floored = clamp_amount(value).floor();
    floored.to_u32().unwrap_or(u32::MAX)
}

#[derive(Debug, Clone)]
pub struct SalaryStore<C = SystemClock> {
    inputs: SalaryInputs,
    show_comparison: bool,
    clock: C,
    insurance: InsuranceCalculator,
}

impl SalaryStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SalaryStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SalaryStore<C> {
    pub const PERSONAL_DEDUCTION: Decimal = RegimeConstants::CURRENT.personal_deduction;
    pub const DEPENDENT_DEDUCTION: Decimal = RegimeConstants::CURRENT.dependent_deduction;
    pub const PERSONAL_DEDUCTION_PRE2026: Decimal = RegimeConstants::PRE_2026.personal_deduction;
    pub const DEPENDENT_DEDUCTION_PRE2026: Decimal = RegimeConstants::PRE_2026.dependent_deduction;

    pub fn with_clock(clock: C) -> Self {
        Self {
            inputs: SalaryInputs::default(),
            show_comparison: false,
            clock,
            insurance: InsuranceCalculator::default(),
        }
    }

    /// Store using non-statutory insurance rates or ceiling.
    ///
    /// # Errors
    ///
    /// Returns the [`InsuranceConfigError`] when `config` fails validation.
    pub fn with_insurance(
        clock: C,
        config: InsuranceConfig,
    ) -> Result<Self, InsuranceConfigError> {
        Ok(Self {
            insurance: InsuranceCalculator::new(config)?,
            ..Self::with_clock(clock)
        })
    }

    pub fn insurance_config(&self) -> &InsuranceConfig {
        self.insurance.config()
    }

    // --- inputs ---

    pub fn inputs(&self) -> &SalaryInputs {
        &self.inputs
    }

    pub fn gross_salary(&self) -> Decimal {
        self.inputs.gross_salary
    }

    pub fn dependents(&self) -> u32 {
        self.inputs.dependents
    }

    pub fn other_deductions(&self) -> Decimal {
        self.inputs.other_deductions
    }

    pub fn show_comparison(&self) -> bool {
        self.show_comparison
    }

    pub fn set_gross_salary(
        &mut self,
        value: Option<Decimal>,
    ) {
        self.inputs.gross_salary = clamp_amount(value);
    }

    pub fn set_dependents(
        &mut self,
        value: Option<Decimal>,
    ) {
        self.inputs.dependents = clamp_count(value);
    }

    pub fn set_other_deductions(
        &mut self,
        value: Option<Decimal>,
    ) {
        self.inputs.other_deductions = clamp_amount(value);
    }

    pub fn set_show_comparison(
        &mut self,
        value: bool,
    ) {
        self.show_comparison = value;
    }

    /// Restores all inputs and the comparison toggle to their initial values.
    pub fn reset(&mut self) {
        self.inputs = SalaryInputs::default();
        self.show_comparison = false;
    }

    // --- regime ---

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn regime(&self) -> Regime {
        Regime::for_date(self.now())
    }

    pub fn is_new_tax_brackets(&self) -> bool {
        is_current_regime_active(self.now())
    }

    pub fn tax_brackets(&self) -> &'static [TaxBracket] {
        select_bracket_table(self.now())
    }

    fn calculator(&self) -> NetSalaryCalculator {
        NetSalaryCalculator::with_insurance(self.regime(), self.insurance.clone())
    }

    // --- insurance ---

    pub fn insurance_salary(&self) -> Decimal {
        self.insurance.insurance_salary(self.inputs.gross_salary)
    }

    pub fn social_insurance(&self) -> Decimal {
        self.insurance.calculate(self.inputs.gross_salary).social
    }

    pub fn health_insurance(&self) -> Decimal {
        self.insurance.calculate(self.inputs.gross_salary).health
    }

    pub fn unemployment_insurance(&self) -> Decimal {
        self.insurance.calculate(self.inputs.gross_salary).unemployment
    }

    pub fn total_insurance(&self) -> Decimal {
        self.insurance.calculate(self.inputs.gross_salary).total
    }

    // --- deductions and tax ---

    pub fn personal_deduction(&self) -> Decimal {
        select_deduction_constants(self.now()).personal_deduction
    }

    pub fn dependents_deduction(&self) -> Decimal {
        self.calculator().dependents_deduction(self.inputs.dependents)
    }

    pub fn total_deductions(&self) -> Decimal {
        self.calculator().total_deductions(&self.inputs)
    }

    pub fn income_before_tax(&self) -> Decimal {
        crate::calculations::net_salary::income_before_tax(
            self.inputs.gross_salary,
            self.total_insurance(),
        )
    }

    pub fn taxable_income(&self) -> Decimal {
        self.calculator()
            .taxable_income(self.income_before_tax(), self.total_deductions())
    }

    pub fn tax_amount(&self) -> Decimal {
        self.calculator()
            .tax_calculator()
            .calculate_tax(self.taxable_income())
    }

    pub fn tax_details(&self) -> Vec<TaxDetail> {
        self.calculator().tax_details(self.taxable_income())
    }

    pub fn net_salary(&self) -> Decimal {
        crate::calculations::net_salary::net_salary(
            self.inputs.gross_salary,
            self.total_insurance(),
            self.tax_amount(),
        )
    }

    // --- snapshots ---

    /// All live figures at once, under the clock-selected regime.
    pub fn breakdown(&self) -> SalaryBreakdown {
        self.calculator().breakdown(&self.inputs)
    }

    /// Pre-2026 against 2026 rules, independent of the clock.
    pub fn comparison(&self) -> ComparisonResult {
        RegimeComparator::new(self.insurance.clone()).compare(&self.inputs)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::clock::FixedClock;
    use crate::{CURRENT_BRACKETS, PRE_2026_BRACKETS};

    fn clock(
        year: i32,
        month: u32,
        day: u32,
    ) -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        )
    }

    fn store_2026() -> SalaryStore<FixedClock> {
        SalaryStore::with_clock(clock(2026, 3, 1))
    }

    fn store_2025() -> SalaryStore<FixedClock> {
        SalaryStore::with_clock(clock(2025, 11, 20))
    }

    // =========================================================================
    // clamping tests
    // =========================================================================

    #[test]
    fn clamp_amount_handles_missing_and_negative() {
        assert_eq!(clamp_amount(None), dec!(0));
        assert_eq!(clamp_amount(Some(dec!(-5))), dec!(0));
        assert_eq!(clamp_amount(Some(dec!(1234.5))), dec!(1234.5));
    }

    #[test]
    fn clamp_count_floors_and_saturates() {
        assert_eq!(clamp_count(Some(dec!(2.9))), 2);
        assert_eq!(clamp_count(Some(dec!(-1.5))), 0);
        assert_eq!(clamp_count(None), 0);
        assert_eq!(clamp_count(Some(dec!(10000000000))), u32::MAX);
    }

    #[test]
    fn amount_from_f64_rejects_non_finite() {
        assert_eq!(amount_from_f64(f64::NAN), None);
        assert_eq!(amount_from_f64(f64::INFINITY), None);
        assert_eq!(amount_from_f64(1500.0), Some(dec!(1500)));
    }

    // =========================================================================
    // setter tests
    // =========================================================================

    #[test]
    fn new_store_starts_empty() {
        let store = store_2026();

        assert_eq!(store.gross_salary(), dec!(0));
        assert_eq!(store.dependents(), 0);
        assert_eq!(store.other_deductions(), dec!(0));
        assert!(!store.show_comparison());
    }

    #[test]
    fn setters_clamp_invalid_values() {
        let mut store = store_2026();

        store.set_gross_salary(Some(dec!(-1000)));
        store.set_dependents(Some(dec!(-3)));
        store.set_other_deductions(None);

        assert_eq!(store.gross_salary(), dec!(0));
        assert_eq!(store.dependents(), 0);
        assert_eq!(store.other_deductions(), dec!(0));
    }

    #[test]
    fn nan_gross_salary_becomes_zero() {
        let mut store = store_2026();
        store.set_gross_salary(Some(dec!(100)));

        store.set_gross_salary(amount_from_f64(f64::NAN));

        assert_eq!(store.gross_salary(), dec!(0));
    }

    #[test]
    fn set_dependents_floors_fractions() {
        let mut store = store_2026();

        store.set_dependents(Some(dec!(1.7)));

        assert_eq!(store.dependents(), 1);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut store = store_2026();
        store.set_gross_salary(Some(dec!(30000000)));
        store.set_dependents(Some(dec!(3)));
        store.set_other_deductions(Some(dec!(500000)));
        store.set_show_comparison(true);

        store.reset();

        assert_eq!(store.inputs(), &SalaryInputs::default());
        assert!(!store.show_comparison());
    }

    // =========================================================================
    // derived value tests
    // =========================================================================

    #[test]
    fn derived_values_after_cutoff() {
        let mut store = store_2026();
        store.set_gross_salary(Some(dec!(20000000)));

        assert!(store.is_new_tax_brackets());
        assert_eq!(store.tax_brackets(), &CURRENT_BRACKETS[..]);
        assert_eq!(store.insurance_salary(), dec!(20000000));
        assert_eq!(store.social_insurance(), dec!(1600000));
        assert_eq!(store.health_insurance(), dec!(300000));
        assert_eq!(store.unemployment_insurance(), dec!(200000));
        assert_eq!(store.total_insurance(), dec!(2100000));
        assert_eq!(store.income_before_tax(), dec!(17900000));
        assert_eq!(store.personal_deduction(), dec!(15500000));
        assert_eq!(store.total_deductions(), dec!(15500000));
        assert_eq!(store.taxable_income(), dec!(2400000));
        assert_eq!(store.tax_amount(), dec!(120000));
        assert_eq!(store.net_salary(), dec!(17780000));
    }

    #[test]
    fn derived_values_before_cutoff_use_old_rules() {
        let mut store = store_2025();
        store.set_gross_salary(Some(dec!(20000000)));

        assert!(!store.is_new_tax_brackets());
        assert_eq!(store.regime(), Regime::Pre2026);
        assert_eq!(store.tax_brackets(), &PRE_2026_BRACKETS[..]);
        assert_eq!(store.personal_deduction(), dec!(11000000));
        assert_eq!(store.taxable_income(), dec!(6900000));
        assert_eq!(store.tax_amount(), dec!(440000));
        assert_eq!(store.net_salary(), dec!(17460000));
    }

    #[test]
    fn dependents_deduction_uses_regime_rate() {
        let mut new_rules = store_2026();
        let mut old_rules = store_2025();
        new_rules.set_dependents(Some(dec!(2)));
        old_rules.set_dependents(Some(dec!(2)));

        assert_eq!(new_rules.dependents_deduction(), dec!(12400000));
        assert_eq!(old_rules.dependents_deduction(), dec!(8800000));
    }

    #[test]
    fn breakdown_matches_individual_getters() {
        let mut store = store_2026();
        store.set_gross_salary(Some(dec!(50000000)));
        store.set_dependents(Some(dec!(2)));

        let breakdown = store.breakdown();

        assert_eq!(breakdown.insurance.total, store.total_insurance());
        assert_eq!(breakdown.income_before_tax, store.income_before_tax());
        assert_eq!(breakdown.result.total_deductions, store.total_deductions());
        assert_eq!(breakdown.result.taxable_income, store.taxable_income());
        assert_eq!(breakdown.result.tax_amount, store.tax_amount());
        assert_eq!(breakdown.tax_details, store.tax_details());
        assert_eq!(breakdown.net_salary(), store.net_salary());
    }

    #[test]
    fn comparison_ignores_the_clock() {
        let mut before = store_2025();
        let mut after = store_2026();
        before.set_gross_salary(Some(dec!(35000000)));
        after.set_gross_salary(Some(dec!(35000000)));

        assert_eq!(before.comparison(), after.comparison());
    }

    #[test]
    fn comparison_current_differs_from_live_values_before_cutoff() {
        let mut store = store_2025();
        store.set_gross_salary(Some(dec!(20000000)));

        let comparison = store.comparison();

        assert_eq!(comparison.current.tax_amount, dec!(120000));
        assert_eq!(store.tax_amount(), dec!(440000));
        assert_eq!(comparison.pre_2026.tax_amount, store.tax_amount());
    }

    #[test]
    fn with_insurance_applies_custom_ceiling() {
        let config = InsuranceConfig {
            base_salary: dec!(2000000),
            ..InsuranceConfig::default()
        };
        let mut store = SalaryStore::with_insurance(clock(2026, 3, 1), config.clone()).unwrap();
        store.set_gross_salary(Some(dec!(50000000)));

        assert_eq!(store.insurance_config(), &config);
        assert_eq!(store.insurance_salary(), dec!(40000000));
        assert_eq!(store.total_insurance(), dec!(4200000));
        assert_eq!(store.comparison().current.net_salary, store.net_salary());
    }

    #[test]
    fn with_insurance_rejects_invalid_config() {
        let config = InsuranceConfig {
            social_rate: dec!(8),
            ..InsuranceConfig::default()
        };

        let result = SalaryStore::with_insurance(clock(2026, 3, 1), config);

        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("social insurance rate must be between 0 and 1, got 8".to_string())
        );
    }

    #[test]
    fn huge_other_deductions_saturate() {
        let mut store = store_2026();
        store.set_gross_salary(Some(dec!(1)));
        store.set_other_deductions(Some(Decimal::MAX));

        assert_eq!(store.total_deductions(), Decimal::MAX);
        assert_eq!(store.taxable_income(), dec!(0));
        assert_eq!(store.tax_amount(), dec!(0));
        assert_eq!(store.net_salary(), dec!(1));
        assert_eq!(store.breakdown().result.total_deductions, Decimal::MAX);

        let comparison = store.comparison();
        assert_eq!(comparison.pre_2026.total_deductions, Decimal::MAX);
        assert_eq!(comparison.difference.deductions, dec!(0));
    }

    #[test]
    fn huge_gross_salary_is_taxed_without_overflow() {
        let mut store = store_2026();
        store.set_gross_salary(Some(Decimal::MAX));
        store.set_dependents(Some(Decimal::MAX));

        assert_eq!(store.dependents(), u32::MAX);
        assert_eq!(store.total_insurance(), dec!(4914000));
        assert!(store.tax_amount() > dec!(0));
        assert!(store.net_salary() > store.tax_amount());
    }

    #[test]
    fn exposes_regime_constants() {
        assert_eq!(SalaryStore::<FixedClock>::PERSONAL_DEDUCTION, dec!(15500000));
        assert_eq!(SalaryStore::<FixedClock>::DEPENDENT_DEDUCTION, dec!(6200000));
        assert_eq!(SalaryStore::<FixedClock>::PERSONAL_DEDUCTION_PRE2026, dec!(11000000));
        assert_eq!(SalaryStore::<FixedClock>::DEPENDENT_DEDUCTION_PRE2026, dec!(4400000));
    }
}
