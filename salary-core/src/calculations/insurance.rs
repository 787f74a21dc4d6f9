//! Compulsory employee insurance contributions.
//!
//! | Contribution | Rate |
//! |--------------|------|
//! | Social (BHXH) | 8% |
//! | Health (BHYT) | 1.5% |
//! | Unemployment (BHTN) | 1% |
//!
//! All three are charged on the gross salary capped at twenty times the
//! statutory base salary (2,340,000), i.e. at most 46,800,000 per month.
//! The rules are the same under both tax regimes.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::InsuranceConfig;
//! use salary_core::calculations::InsuranceCalculator;
//!
//! let calculator = InsuranceCalculator::new(InsuranceConfig::default())?;
//! let result = calculator.calculate(dec!(20000000));
//!
//! assert_eq!(result.social, dec!(1600000));
//! assert_eq!(result.health, dec!(300000));
//! assert_eq!(result.unemployment, dec!(200000));
//! assert_eq!(result.total, dec!(2100000));
//! # Ok::<(), salary_core::calculations::InsuranceConfigError>(())
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::{min, round_to_unit};
use crate::{InsuranceBreakdown, InsuranceConfig};

/// Errors reported by [`InsuranceConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsuranceConfigError {
    #[error("social insurance rate must be between 0 and 1, got {0}")]
    InvalidSocialRate(Decimal),

    #[error("health insurance rate must be between 0 and 1, got {0}")]
    InvalidHealthRate(Decimal),

    #[error("unemployment insurance rate must be between 0 and 1, got {0}")]
    InvalidUnemploymentRate(Decimal),

    #[error("base salary must be positive, got {0}")]
    InvalidBaseSalary(Decimal),

    #[error("insurance cap multiplier must be positive, got {0}")]
    InvalidCapMultiplier(Decimal),
}

fn is_rate(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

impl InsuranceConfig {
    /// Checks that every rate is a fraction and the ceiling is positive.
    ///
    /// # Errors
    ///
    /// Returns the first [`InsuranceConfigError`] found.
    pub fn validate(&self) -> Result<(), InsuranceConfigError> {
        if !is_rate(self.social_rate) {
            return Err(InsuranceConfigError::InvalidSocialRate(self.social_rate));
        }
        if !is_rate(self.health_rate) {
            return Err(InsuranceConfigError::InvalidHealthRate(self.health_rate));
        }
        if !is_rate(self.unemployment_rate) {
            return Err(InsuranceConfigError::InvalidUnemploymentRate(
                self.unemployment_rate,
            ));
        }
        if self.base_salary <= Decimal::ZERO {
            return Err(InsuranceConfigError::InvalidBaseSalary(self.base_salary));
        }
        if self.cap_multiplier <= Decimal::ZERO {
            return Err(InsuranceConfigError::InvalidCapMultiplier(
                self.cap_multiplier,
            ));
        }
        Ok(())
    }
}

/// Calculator for the three employee contributions.
///
/// [`Default`] uses the statutory rates.
#[derive(Debug, Clone, Default)]
pub struct InsuranceCalculator {
    config: InsuranceConfig,
}

impl InsuranceCalculator {
    /// # Errors
    ///
    /// Returns the [`InsuranceConfigError`] from [`InsuranceConfig::validate`].
    pub fn new(config: InsuranceConfig) -> Result<Self, InsuranceConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &InsuranceConfig {
        &self.config
    }

    /// Gross salary capped at the contribution ceiling.
    pub fn insurance_salary(
        &self,
        gross_salary: Decimal,
    ) -> Decimal {
        min(gross_salary, self.config.max_insurance_salary())
    }

    /// Calculates every contribution for `gross_salary`.
    ///
    /// Each contribution is rounded to a whole unit before summing.
    pub fn calculate(
        &self,
        gross_salary: Decimal,
    ) -> InsuranceBreakdown {
        let insurance_salary = self.insurance_salary(gross_salary);

        let social = self.contribution(insurance_salary, self.config.social_rate);
        let health = self.contribution(insurance_salary, self.config.health_rate);
        let unemployment = self.contribution(insurance_salary, self.config.unemployment_rate);

        InsuranceBreakdown {
            insurance_salary,
            social,
            health,
            unemployment,
            total: social + health + unemployment,
        }
    }

    fn contribution(
        &self,
        insurance_salary: Decimal,
        rate: Decimal,
    ) -> Decimal {
        round_to_unit(insurance_salary * rate)
    }
}
