//! Monthly salary and personal income tax engine.
//!
//! Computes compulsory insurance, family deductions, progressive income tax
//! and net salary under the pre-2026 and 2026 regimes, and compares the two.

pub mod calculations;
pub mod clock;
pub mod format;
pub mod models;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::format_currency;
pub use models::*;
pub use store::{SalaryStore, amount_from_f64, clamp_amount, clamp_count};
