//! Regime selection by date.
//!
//! The pre-2026 table and deductions apply strictly before
//! [`NEW_REGIME_EFFECTIVE_DATE`]; from that instant on the 2026 rules apply.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::{NEW_REGIME_EFFECTIVE_DATE, Regime, RegimeConstants, TaxBracket};

/// Whether the 2026 rules are in force at `now`.
pub fn is_current_regime_active(now: NaiveDateTime) -> bool {
    let active = Regime::for_date(now) == Regime::Current;
    debug!(%now, effective = %NEW_REGIME_EFFECTIVE_DATE, active, "regime check");
    active
}

pub fn select_bracket_table(now: NaiveDateTime) -> &'static [TaxBracket] {
    select_regime(now).brackets()
}

pub fn select_deduction_constants(now: NaiveDateTime) -> RegimeConstants {
    select_regime(now).constants()
}

fn select_regime(now: NaiveDateTime) -> Regime {
    if is_current_regime_active(now) {
        Regime::Current
    } else {
        Regime::Pre2026
    }
}
