//! Common utility functions for tax calculations.
//!
//! Shared clamping helpers used by both the ordinary and preferential
//! calculations, plus the float-to-decimal entry point for callers that hold
//! amounts as `f64`.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::min;
///
/// assert_eq!(min(dec!(100.00), dec!(200.00)), dec!(100.00));
/// assert_eq!(min(dec!(-50.00), dec!(50.00)), dec!(-50.00));
/// ```
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Clamps negative values to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-0.01)), Decimal::ZERO);
/// assert_eq!(non_negative(dec!(12.34)), dec!(12.34));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}

/// Converts a floating-point amount to a decimal.
///
/// Non-finite input (`NaN`, `±∞`) becomes zero. Finite values outside the
/// range of a [`Decimal`] return `None`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::amount_from_f64;
///
/// assert_eq!(amount_from_f64(1250.5), Some(dec!(1250.5)));
/// assert_eq!(amount_from_f64(f64::NAN), Some(Decimal::ZERO));
/// assert_eq!(amount_from_f64(1e40), None);
/// ```
pub fn amount_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return Some(Decimal::ZERO);
    }

    Decimal::from_f64(value)
}
