use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal-rate slice of a progressive schedule.
///
/// Brackets are laid out in ascending order; each one starts where the
/// previous one ended (the first starts at zero). `upper_bound` of `None`
/// marks the unbounded top bracket.
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

    /// True when `income` does not reach past this bracket.
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        self.upper_bound.is_none_or(|bound| income <= bound)
    }
}
