use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How much of the taxable income fell into one bracket and what it cost.
///
/// `tax` is rounded on its own, so summing the rows of a schedule can land
/// a unit or two away from the single rounded total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDetail {
    /// Formatted bracket range, e.g. `"10.000.000 - 30.000.000"`.
    pub range_label: String,
    /// Marginal rate as a whole percentage.
    pub rate_percent: Decimal,
    /// Portion of taxable income falling in this bracket.
    pub taxable_amount: Decimal,
    /// Tax on `taxable_amount`, rounded to a whole unit.
    pub tax: Decimal,
}

impl TaxDetail {
    pub fn rate_label(&self) -> String {
        format!("{}%", self.rate_percent)
    }
}
