//! Progressive (bracket-by-bracket) personal income tax.
//!
//! Taxable income is split across the brackets of a schedule in ascending
//! order; each slice is taxed at its bracket's marginal rate and the slices
//! are summed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::CURRENT_BRACKETS;
//! use salary_core::calculations::ProgressiveTaxCalculator;
//!
//! let calculator = ProgressiveTaxCalculator::new(&CURRENT_BRACKETS)?;
//!
//! // 10,000,000 × 5% + 7,186,000 × 10%
//! assert_eq!(calculator.calculate_tax(dec!(17186000)), dec!(1218600));
//!
//! let details = calculator.tax_details(dec!(17186000));
//! assert_eq!(details.len(), 2);
//! assert_eq!(details[1].range_label, "10.000.000 - 30.000.000");
//! assert_eq!(details[1].rate_label(), "10%");
//! # Ok::<(), salary_core::calculations::BracketTableError>(())
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::trace;

use crate::calculations::common::{min, round_to_unit};
use crate::format::format_currency;
use crate::{Regime, TaxBracket, TaxDetail};

/// Problems found by [`validate_brackets`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("no tax brackets provided")]
    Empty,

    #[error("bracket {index} has rate {rate}, expected a value between 0 and 1")]
    InvalidRate { index: usize, rate: Decimal },

    #[error("bracket {index} upper bound {bound} is not above the previous bound {previous}")]
    NotAscending {
        index: usize,
        bound: Decimal,
        previous: Decimal,
    },

    #[error("bracket {0} is unbounded but is not the last bracket")]
    UnboundedBeforeLast(usize),

    #[error("last bracket must be unbounded")]
    BoundedTop,
}

/// Checks that `brackets` forms a contiguous schedule starting at zero:
/// strictly ascending bounds, unbounded last bracket, rates in `[0, 1]`.
///
/// # Errors
///
/// Returns the first [`BracketTableError`] found.
pub fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), BracketTableError> {
    let last_index = brackets.len().checked_sub(1).ok_or(BracketTableError::Empty)?;
    let mut previous = Decimal::ZERO;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(BracketTableError::InvalidRate {
                index,
                rate: bracket.rate,
            });
        }

        match bracket.upper_bound {
            Some(bound) if bound <= previous => {
                return Err(BracketTableError::NotAscending {
                    index,
                    bound,
                    previous,
                });
            }
            Some(_) if index == last_index => return Err(BracketTableError::BoundedTop),
            Some(bound) => previous = bound,
            None if index != last_index => {
                return Err(BracketTableError::UnboundedBeforeLast(index));
            }
            None => {}
        }
    }

    Ok(())
}

/// One slice of taxable income as it falls into a bracket.
struct BracketSlice<'a> {
    bracket: &'a TaxBracket,
    lower_bound: Decimal,
    amount: Decimal,
}

/// Applies a bracket schedule to taxable income.
#[derive(Debug, Clone, Copy)]
pub struct ProgressiveTaxCalculator<'a> {
    brackets: &'a [TaxBracket],
}

impl ProgressiveTaxCalculator<'static> {
    /// Calculator for a builtin schedule.
    pub fn for_regime(regime: Regime) -> Self {
        Self {
            brackets: regime.brackets(),
        }
    }
}

impl<'a> ProgressiveTaxCalculator<'a> {
    /// Calculator for a caller-supplied schedule.
    ///
    /// # Errors
    ///
    /// Returns the [`BracketTableError`] from [`validate_brackets`] when the
    /// schedule is unusable.
    pub fn new(brackets: &'a [TaxBracket]) -> Result<Self, BracketTableError> {
        validate_brackets(brackets)?;
        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &'a [TaxBracket] {
        self.brackets
    }

    /// Total tax on `taxable_amount`, rounded once to a whole unit.
    pub fn calculate_tax(
        &self,
        taxable_amount: Decimal,
    ) -> Decimal {
        let tax: Decimal = self
            .slices(taxable_amount)
            .iter()
            .map(|slice| slice.amount * slice.bracket.rate)
            .sum();

        round_to_unit(tax)
    }

    /// Per-bracket breakdown of the tax on `taxable_amount`.
    ///
    /// Only brackets that received income are listed, and each row's tax is
    /// rounded independently of the others.
    pub fn tax_details(
        &self,
        taxable_amount: Decimal,
    ) -> Vec<TaxDetail> {
        self.slices(taxable_amount)
            .into_iter()
            .filter(|slice| slice.amount > Decimal::ZERO)
            .map(|slice| TaxDetail {
                range_label: range_label(slice.lower_bound, slice.bracket.upper_bound),
                rate_percent: slice.bracket.rate_percent(),
                taxable_amount: slice.amount,
                tax: round_to_unit(slice.amount * slice.bracket.rate),
            })
            .collect()
    }

    /// Walks the schedule, handing out income until none remains.
    fn slices(
        &self,
        taxable_amount: Decimal,
    ) -> Vec<BracketSlice<'a>> {
        let mut remaining = taxable_amount;
        let mut previous_bound = Decimal::ZERO;
        let mut slices = Vec::new();

        for bracket in self.brackets {
            if remaining <= Decimal::ZERO {
                break;
            }

            let amount = match bracket.span(previous_bound) {
                Some(span) => min(remaining, span),
                None => remaining,
            };
            trace!(
                lower = %previous_bound,
                rate = %bracket.rate,
                %amount,
                "bracket slice"
            );

            slices.push(BracketSlice {
                bracket,
                lower_bound: previous_bound,
                amount,
            });

            remaining -= amount;
            if let Some(upper) = bracket.upper_bound {
                previous_bound = upper;
            }
        }

        slices
    }
}

fn range_label(
    lower: Decimal,
    upper: Option<Decimal>,
) -> String {
    let upper = upper.map_or_else(|| "∞".to_string(), format_currency);
    format!("{} - {}", format_currency(lower), upper)
}
