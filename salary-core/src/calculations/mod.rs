//! Salary and personal income tax calculations.
//!
//! Each module covers one stage of the monthly payslip: insurance,
//! the progressive schedule, the net-salary pipeline, and the comparison
//! between regimes.

pub mod common;
pub mod comparison;
pub mod insurance;
pub mod net_salary;
pub mod progressive;
pub mod regime;

pub use comparison::{RegimeComparator, compare_regimes};
pub use insurance::{InsuranceCalculator, InsuranceConfigError};
pub use net_salary::NetSalaryCalculator;
pub use progressive::{BracketTableError, ProgressiveTaxCalculator, validate_brackets};
pub use regime::{is_current_regime_active, select_bracket_table, select_deduction_constants};
