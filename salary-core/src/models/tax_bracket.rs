use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal-rate band of a progressive schedule.
///
/// A bracket covers `[previous_bound, upper_bound)`; `upper_bound` is `None`
/// for the open-ended top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub const fn bounded(
        upper_bound: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub const fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }

    /// Width of the bracket given the bound of the one below it.
    /// `None` means the bracket absorbs everything that remains.
    pub fn span(
        &self,
        previous_bound: Decimal,
    ) -> Option<Decimal> {
        self.upper_bound.map(|upper| upper - previous_bound)
    }

    /// The rate as a whole percentage, e.g. `0.05` becomes `5`.
    pub fn rate_percent(&self) -> Decimal {
        (self.rate * Decimal::ONE_HUNDRED).normalize()
    }
}
