mod breakdown;
mod comparison;
mod insurance;
mod regime;
mod salary_inputs;
mod tax_bracket;
mod tax_detail;

pub use breakdown::SalaryBreakdown;
pub use comparison::{ComparisonDifference, ComparisonResult, RegimeResult};
pub use insurance::{InsuranceBreakdown, InsuranceConfig};
pub use regime::{
    CURRENT_BRACKETS, NEW_REGIME_EFFECTIVE_DATE, PRE_2026_BRACKETS, Regime, RegimeConstants,
};
pub use salary_inputs::SalaryInputs;
pub use tax_bracket::TaxBracket;
pub use tax_detail::TaxDetail;
