//! Progressive-bracket ordinary income tax.
//!
//! Each slice of taxable income is taxed at the rate of the bracket it falls
//! in. The walk starts at zero and climbs the schedule one bracket at a time
//! until the income is exhausted.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::ordinary_bracket_tax;
//!
//! // 10% of the first 23,850 plus 12% of the next 73,100.
//! assert_eq!(ordinary_bracket_tax(dec!(96950)), dec!(11157));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::TaxBracket;
use crate::calculations::common::min;
use crate::schedules::ORDINARY_BRACKETS_2025_MFJ;

/// Evaluates a progressive bracket table.
///
/// The table must be sorted by ascending `upper_bound` and end with an
/// unbounded bracket; income above the last bounded bracket of a table that
/// does not is left untaxed.
#[derive(Debug, Clone, Copy)]
pub struct BracketSchedule<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> BracketSchedule<'a> {
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// The 2025 married-filing-jointly schedule.
    pub fn mfj_2025() -> BracketSchedule<'static> {
        BracketSchedule::new(&ORDINARY_BRACKETS_2025_MFJ)
    }

    pub fn brackets(&self) -> &'a [TaxBracket] {
        self.brackets
    }

    /// Cumulative tax on `taxable_income`.
    ///
    /// Zero or negative income yields zero.
    pub fn tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        let mut previous_bound = Decimal::ZERO;

        for bracket in self.brackets {
            if taxable_income <= previous_bound {
                break;
            }

            let top = match bracket.upper_bound {
                Some(bound) => min(taxable_income, bound),
                None => taxable_income,
            };
            let taxed_in_bracket = top - previous_bound;
            if taxed_in_bracket > Decimal::ZERO {
                tax += taxed_in_bracket * bracket.rate;
            }

            match bracket.upper_bound {
                Some(bound) if taxable_income > bound => previous_bound = bound,
                _ => break,
            }
        }

        trace!(%taxable_income, %tax, "ordinary bracket tax");
        tax
    }

    /// Rate of the bracket holding the last dollar of `taxable_income`.
    ///
    /// Returns `None` for zero or negative income, or when the income lies
    /// beyond a table with no unbounded bracket.
    pub fn marginal_rate(
        &self,
        taxable_income: Decimal,
    ) -> Option<Decimal> {
        if taxable_income <= Decimal::ZERO {
            return None;
        }

        self.brackets
            .iter()
            .find(|b| b.contains(taxable_income))
            .map(|b| b.rate)
    }
}

/// 2025 married-filing-jointly ordinary income tax on `taxable_income`.
pub fn ordinary_bracket_tax(taxable_income: Decimal) -> Decimal {
    BracketSchedule::mfj_2025().tax(taxable_income)
}
