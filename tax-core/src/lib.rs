pub mod calculations;
pub mod models;
pub mod schedules;

pub use calculations::{ordinary_bracket_tax, stacked_preferential_tax};
pub use models::*;
