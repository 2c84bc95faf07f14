//! Federal tax calculations.
//!
//! Both calculations are pure functions over the constant tables in
//! [`crate::schedules`]; they never fail and never allocate.

pub mod common;
pub mod ordinary;
pub mod preferential;

pub use ordinary::{BracketSchedule, ordinary_bracket_tax};
pub use preferential::{
    PreferentialSplit, stacked_preferential_tax, stacked_preferential_tax_for_tag,
};
