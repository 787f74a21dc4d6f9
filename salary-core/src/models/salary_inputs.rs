use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three raw values every derived figure is computed from.
///
/// Construct through [`SalaryInputs::new`] or the store setters so that the
/// non-negative invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryInputs {
    pub gross_salary: Decimal,
    pub dependents: u32,
    pub other_deductions: Decimal,
}

impl SalaryInputs {
    /// Builds inputs, clamping negative amounts to zero.
    pub fn new(
        gross_salary: Decimal,
        dependents: u32,
        other_deductions: Decimal,
    ) -> Self {
        Self {
            gross_salary: gross_salary.max(Decimal::ZERO),
            dependents,
            other_deductions: other_deductions.max(Decimal::ZERO),
        }
    }
}
