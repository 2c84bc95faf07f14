//! Stacked preferential-rate tax on qualified dividends and long-term gains.
//!
//! Preferential income is placed on top of ordinary income. Whatever part of
//! it sits below the 0% ceiling is untaxed, the part between the 0% and 15%
//! ceilings is taxed at 15%, and the rest at 20%. Tax on the ordinary income
//! itself is not included.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::FilingStatusCode;
//! use tax_core::calculations::stacked_preferential_tax;
//!
//! let tax = stacked_preferential_tax(dec!(0), dec!(600000), FilingStatusCode::Single);
//!
//! assert_eq!(tax, dec!(86001.25));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calculations::common::{max, min, non_negative};
use crate::models::{FilingStatusCode, PreferentialThresholds};
use crate::schedules::{FIFTEEN_PERCENT, TWENTY_PERCENT, preferential_thresholds_2024};

/// How preferential income divides across the three rate bands.
///
/// The slices are never negative and always add back up to the preferential
/// income they were computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferentialSplit {
    pub zero_rate_amount: Decimal,
    pub fifteen_rate_amount: Decimal,
    pub twenty_rate_amount: Decimal,
}

impl PreferentialSplit {
    /// Stacks `pref_taxable` on `ordinary_taxable` against `thresholds`.
    ///
    /// Non-positive preferential income yields an all-zero split. Negative
    /// ordinary income is treated as zero.
    pub fn compute(
        ordinary_taxable: Decimal,
        pref_taxable: Decimal,
        thresholds: &PreferentialThresholds,
    ) -> Self {
        if pref_taxable <= Decimal::ZERO {
            return Self {
                zero_rate_amount: Decimal::ZERO,
                fifteen_rate_amount: Decimal::ZERO,
                twenty_rate_amount: Decimal::ZERO,
            };
        }

        let ordinary = non_negative(ordinary_taxable);

        let zero_rate_amount = non_negative(min(
            pref_taxable,
            thresholds.zero_rate_ceiling - ordinary,
        ));
        let base_for_fifteen = max(ordinary, thresholds.zero_rate_ceiling);
        let fifteen_rate_amount = non_negative(min(
            pref_taxable - zero_rate_amount,
            thresholds.fifteen_rate_ceiling - base_for_fifteen,
        ));
        let twenty_rate_amount =
            non_negative(pref_taxable - zero_rate_amount - fifteen_rate_amount);

        Self {
            zero_rate_amount,
            fifteen_rate_amount,
            twenty_rate_amount,
        }
    }

    pub fn total(&self) -> Decimal {
        self.zero_rate_amount + self.fifteen_rate_amount + self.twenty_rate_amount
    }

    /// Tax owed on the split. The 0% slice contributes nothing.
    pub fn tax(&self) -> Decimal {
        self.fifteen_rate_amount * FIFTEEN_PERCENT + self.twenty_rate_amount * TWENTY_PERCENT
    }
}

/// Tax on preferential income only, using the 2024 thresholds for `status`.
pub fn stacked_preferential_tax(
    ordinary_taxable: Decimal,
    pref_taxable: Decimal,
    status: FilingStatusCode,
) -> Decimal {
    let thresholds = preferential_thresholds_2024(status);
    let split = PreferentialSplit::compute(ordinary_taxable, pref_taxable, &thresholds);
    let tax = split.tax();

    trace!(
        %ordinary_taxable,
        %pref_taxable,
        %status,
        zero = %split.zero_rate_amount,
        fifteen = %split.fifteen_rate_amount,
        twenty = %split.twenty_rate_amount,
        %tax,
        "stacked preferential tax"
    );
    tax
}

/// [`stacked_preferential_tax`] for a raw filing-status tag.
///
/// The tag is matched case-insensitively; anything unrecognised is taxed as
/// `single`.
pub fn stacked_preferential_tax_for_tag(
    ordinary_taxable: Decimal,
    pref_taxable: Decimal,
    filing_status: &str,
) -> Decimal {
    stacked_preferential_tax(
        ordinary_taxable,
        pref_taxable,
        FilingStatusCode::parse_or_single(filing_status),
    )
}
