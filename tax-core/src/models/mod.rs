mod filing_status;
mod preferential_thresholds;
mod tax_bracket;

pub use filing_status::FilingStatusCode;
pub use preferential_thresholds::PreferentialThresholds;
pub use tax_bracket::TaxBracket;
