//! Published federal rate tables.
//!
//! Every table here is a compile-time constant. Amounts are in whole dollars
//! and rates are decimal fractions (`0.10` is 10%).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{FilingStatusCode, PreferentialThresholds, TaxBracket};

/// 2025 ordinary income tax rate schedule, married filing jointly.
pub static ORDINARY_BRACKETS_2025_MFJ: [TaxBracket; 7] = [
    TaxBracket::bounded(dec!(23850), dec!(0.10)),
    TaxBracket::bounded(dec!(96950), dec!(0.12)),
    TaxBracket::bounded(dec!(206700), dec!(0.22)),
    TaxBracket::bounded(dec!(394600), dec!(0.24)),
    TaxBracket::bounded(dec!(501050), dec!(0.32)),
    TaxBracket::bounded(dec!(751600), dec!(0.35)),
    TaxBracket::unbounded(dec!(0.37)),
];

/// Rate applied to preferential income in the middle band.
pub const FIFTEEN_PERCENT: Decimal = dec!(0.15);

/// Rate applied to preferential income above the 15% ceiling.
pub const TWENTY_PERCENT: Decimal = dec!(0.20);

/// 2024 qualified dividend / long-term capital gain band ceilings.
pub fn preferential_thresholds_2024(status: FilingStatusCode) -> PreferentialThresholds {
    let (zero_rate_ceiling, fifteen_rate_ceiling) = match status {
        FilingStatusCode::Single => (dec!(47025), dec!(518900)),
        FilingStatusCode::MarriedFilingJointly => (dec!(94050), dec!(583750)),
        FilingStatusCode::MarriedFilingSeparately => (dec!(47025), dec!(291850)),
        FilingStatusCode::HeadOfHousehold => (dec!(63000), dec!(551350)),
    };

    PreferentialThresholds {
        zero_rate_ceiling,
        fifteen_rate_ceiling,
    }
}
