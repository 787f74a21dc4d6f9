use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{InsuranceBreakdown, Regime, RegimeResult, SalaryInputs, TaxDetail};

/// Every figure of the live calculation, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub regime: Regime,
    pub inputs: SalaryInputs,
    pub insurance: InsuranceBreakdown,
    /// Gross salary less insurance, floored at zero.
    pub income_before_tax: Decimal,
    pub result: RegimeResult,
    pub tax_details: Vec<TaxDetail>,
}

impl SalaryBreakdown {
    pub fn net_salary(&self) -> Decimal {
        self.result.net_salary
    }

    pub fn tax_amount(&self) -> Decimal {
        self.result.tax_amount
    }
}
