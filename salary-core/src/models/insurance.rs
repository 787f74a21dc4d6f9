use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Statutory employee contribution rates and the salary ceiling they apply to.
///
/// The ceiling is `base_salary × cap_multiplier`; with the defaults that is
/// 46,800,000 per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceConfig {
    /// Social insurance (BHXH) rate.
    pub social_rate: Decimal,

    /// Health insurance (BHYT) rate.
    pub health_rate: Decimal,

    /// Unemployment insurance (BHTN) rate.
    pub unemployment_rate: Decimal,

    /// Statutory base salary used to derive the contribution ceiling.
    pub base_salary: Decimal,

    /// How many base salaries the ceiling spans.
    pub cap_multiplier: Decimal,
}

impl InsuranceConfig {
    pub const SOCIAL_RATE: Decimal = dec!(0.08);
    pub const HEALTH_RATE: Decimal = dec!(0.015);
    pub const UNEMPLOYMENT_RATE: Decimal = dec!(0.01);
    pub const BASE_SALARY: Decimal = dec!(2340000);
    pub const CAP_MULTIPLIER: Decimal = dec!(20);

    /// Highest salary contributions are computed on.
    pub fn max_insurance_salary(&self) -> Decimal {
        self.base_salary * self.cap_multiplier
    }
}

impl Default for InsuranceConfig {
    fn default() -> Self {
        Self {
            social_rate: Self::SOCIAL_RATE,
            health_rate: Self::HEALTH_RATE,
            unemployment_rate: Self::UNEMPLOYMENT_RATE,
            base_salary: Self::BASE_SALARY,
            cap_multiplier: Self::CAP_MULTIPLIER,
        }
    }
}

/// Employee insurance contributions for one month.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InsuranceBreakdown {
    /// Gross salary capped at the contribution ceiling.
    pub insurance_salary: Decimal,
    pub social: Decimal,
    pub health: Decimal,
    pub unemployment: Decimal,
    pub total: Decimal,
}
