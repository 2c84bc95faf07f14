use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ceilings of the 0% and 15% preferential-rate bands for one filing status.
///
/// Both ceilings are measured against total taxable income, with preferential
/// income stacked on top of ordinary income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferentialThresholds {
    pub zero_rate_ceiling: Decimal,
    pub fifteen_rate_ceiling: Decimal,
}
