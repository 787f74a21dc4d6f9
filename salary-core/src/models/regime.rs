use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::TaxBracket;

/// First day on which the 2026 schedule and deductions apply.
pub const NEW_REGIME_EFFECTIVE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 1, 1) {
    Some(date) => date,
    None => panic!("invalid regime effective date"),
};

/// Seven-bracket monthly schedule in force until 31 December 2025.
pub const PRE_2026_BRACKETS: [TaxBracket; 7] = [
    TaxBracket::bounded(dec!(5000000), dec!(0.05)),
    TaxBracket::bounded(dec!(10000000), dec!(0.10)),
    TaxBracket::bounded(dec!(18000000), dec!(0.15)),
    TaxBracket::bounded(dec!(32000000), dec!(0.20)),
    TaxBracket::bounded(dec!(52000000), dec!(0.25)),
    TaxBracket::bounded(dec!(80000000), dec!(0.30)),
    TaxBracket::unbounded(dec!(0.35)),
];

/// Five-bracket monthly schedule from 1 January 2026.
pub const CURRENT_BRACKETS: [TaxBracket; 5] = [
    TaxBracket::bounded(dec!(10000000), dec!(0.05)),
    TaxBracket::bounded(dec!(30000000), dec!(0.10)),
    TaxBracket::bounded(dec!(60000000), dec!(0.20)),
    TaxBracket::bounded(dec!(100000000), dec!(0.30)),
    TaxBracket::unbounded(dec!(0.35)),
];

/// Family deduction amounts of a regime, per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeConstants {
    pub personal_deduction: Decimal,
    pub dependent_deduction: Decimal,
}

impl RegimeConstants {
    pub const PRE_2026: Self = Self {
        personal_deduction: dec!(11000000),
        dependent_deduction: dec!(4400000),
    };

    pub const CURRENT: Self = Self {
        personal_deduction: dec!(15500000),
        dependent_deduction: dec!(6200000),
    };
}

/// A fixed pairing of deduction constants and bracket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    Pre2026,
    Current,
}

impl Regime {
    pub fn all() -> &'static [Regime] {
        &[Regime::Pre2026, Regime::Current]
    }

    /// The regime in force at `now`. The cutoff instant itself belongs to
    /// [`Regime::Current`].
    pub fn for_date(now: NaiveDateTime) -> Self {
        if now.date() >= NEW_REGIME_EFFECTIVE_DATE {
            Regime::Current
        } else {
            Regime::Pre2026
        }
    }

    pub fn brackets(&self) -> &'static [TaxBracket] {
        match self {
            Regime::Pre2026 => &PRE_2026_BRACKETS,
            Regime::Current => &CURRENT_BRACKETS,
        }
    }

    pub fn constants(&self) -> RegimeConstants {
        match self {
            Regime::Pre2026 => RegimeConstants::PRE_2026,
            Regime::Current => RegimeConstants::CURRENT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Pre2026 => "pre2026",
            Regime::Current => "current",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pre2026" | "pre-2026" | "old" => Some(Regime::Pre2026),
            "current" | "2026" | "new" => Some(Regime::Current),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Regime::Pre2026 => "Before 2026 (7 brackets)",
            Regime::Current => "From 1 January 2026 (5 brackets)",
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn at(
        year: i32,
        month: u32,
        day: u32,
        hms: (u32, u32, u32),
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hms.0, hms.1, hms.2)
            .unwrap()
    }

    #[test]
    fn cutoff_instant_selects_current() {
        assert_eq!(Regime::for_date(at(2026, 1, 1, (0, 0, 0))), Regime::Current);
    }

    #[test]
    fn last_second_of_2025_selects_pre_2026() {
        assert_eq!(Regime::for_date(at(2025, 12, 31, (23, 59, 59))), Regime::Pre2026);
    }

    #[test]
    fn later_dates_select_current() {
        assert_eq!(Regime::for_date(at(2031, 6, 15, (12, 0, 0))), Regime::Current);
    }

    #[test]
    fn schedule_constants_are_usable_in_const_context() {
        const TOP_RATE: Decimal = CURRENT_BRACKETS[4].rate;
        const FIRST_BOUND: Option<Decimal> = PRE_2026_BRACKETS[0].upper_bound;
        const PERSONAL: Decimal = RegimeConstants::CURRENT.personal_deduction;

        assert_eq!(TOP_RATE, dec!(0.35));
        assert_eq!(FIRST_BOUND, Some(dec!(5000000)));
        assert_eq!(PERSONAL, dec!(15500000));
    }

    #[test]
    fn constants_per_regime() {
        assert_eq!(Regime::Pre2026.constants().personal_deduction, dec!(11000000));
        assert_eq!(Regime::Pre2026.constants().dependent_deduction, dec!(4400000));
        assert_eq!(Regime::Current.constants().personal_deduction, dec!(15500000));
        assert_eq!(Regime::Current.constants().dependent_deduction, dec!(6200000));
    }

    #[test]
    fn bracket_counts_per_regime() {
        assert_eq!(Regime::Pre2026.brackets().len(), 7);
        assert_eq!(Regime::Current.brackets().len(), 5);
    }

    #[test]
    fn last_bracket_is_unbounded() {
        for regime in Regime::all() {
            let last = regime.brackets().last().unwrap();
            assert_eq!(last.upper_bound, None);
            assert_eq!(last.rate, dec!(0.35));
        }
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(Regime::parse("pre2026"), Some(Regime::Pre2026));
        assert_eq!(Regime::parse(" OLD "), Some(Regime::Pre2026));
        assert_eq!(Regime::parse("current"), Some(Regime::Current));
        assert_eq!(Regime::parse("2026"), Some(Regime::Current));
        assert_eq!(Regime::parse("2019"), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for regime in Regime::all() {
            assert_eq!(Regime::parse(regime.as_str()), Some(*regime));
        }
    }
}
