//! CSV loader for batches of calculation requests.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Only `calc`
//! is required; the other columns may be left out entirely or left empty on a
//! row, which has the same effect as omitting the field from a JSON request.
//!
//! | Column             | Required | Notes                                        |
//! |--------------------|----------|----------------------------------------------|
//! | `calc`             | yes      | `FED_TAX_2025_MFJ` or `FED_PREF_TAX_2024`    |
//! | `taxable_income`   | no       | Used by `FED_TAX_2025_MFJ`                   |
//! | `ordinary_taxable` | no       | Used by `FED_PREF_TAX_2024`                  |
//! | `pref_taxable`     | no       | Used by `FED_PREF_TAX_2024`                  |
//! | `filing_status`    | no       | `single`, `mfj`, `mfs`, `hoh`                |
//!
//! ### Example
//!
//! ```csv
//! calc,taxable_income,ordinary_taxable,pref_taxable,filing_status
//! FED_TAX_2025_MFJ,96950,,,
//! FED_PREF_TAX_2024,,0,600000,single
//! ```
use serde::Deserialize;
use serde_json::Value;
use tax_core::FilingStatusCode;

use crate::request::{CalculationRequest, RawRequest, RequestError};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    calc: String,
    #[serde(default)]
    taxable_income: Option<String>,
    #[serde(default)]
    ordinary_taxable: Option<String>,
    #[serde(default)]
    pref_taxable: Option<String>,
    #[serde(default)]
    filing_status: Option<String>,
}

impl CsvRow {
    fn into_raw(self) -> RawRequest {
        let cell = |v: Option<String>| v.filter(|s| !s.is_empty()).map(Value::String);

        RawRequest {
            calc: Some(Value::String(self.calc)),
            taxable_income: cell(self.taxable_income),
            ordinary_taxable: cell(self.ordinary_taxable),
            pref_taxable: cell(self.pref_taxable),
            filing_status: cell(self.filing_status),
        }
    }
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a batch.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read batch file: {0}")]
    Io(#[from] std::io::Error),

    /// Bad structure, missing `calc` column, wrong column count.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, counting from the first line after the header.
    #[error("row {row}: {source}")]
    InvalidRow { row: usize, source: RequestError },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parse CSV text and validate every row. Rows are returned in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid.
/// * [`CsvLoadError::InvalidRow`] for the first row that fails validation.
pub fn load_from_str(
    input: &str,
    default_status: FilingStatusCode,
) -> Result<Vec<CalculationRequest>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let raw = result?.into_raw();
            CalculationRequest::from_raw(&raw, default_status)
                .map_err(|source| CsvLoadError::InvalidRow { row: idx + 1, source })
        })
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(
    path: &std::path::Path,
    default_status: FilingStatusCode,
) -> Result<Vec<CalculationRequest>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents, default_status)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    const HEADER: &str = "calc,taxable_income,ordinary_taxable,pref_taxable,filing_status";

    fn load(rows: &[&str]) -> Result<Vec<CalculationRequest>, CsvLoadError> {
        let mut input = String::from(HEADER);
        for row in rows {
            input.push('\n');
            input.push_str(row);
        }
        load_from_str(&input, FilingStatusCode::Single)
    }

    #[test]
    fn loads_both_calculations_in_order() {
        let requests = load(&[
            "FED_TAX_2025_MFJ,96950,,,",
            "FED_PREF_TAX_2024,,0,600000,mfj",
        ])
        .unwrap();

        assert_eq!(
            requests,
            vec![
                CalculationRequest::OrdinaryTax {
                    taxable_income: dec!(96950)
                },
                CalculationRequest::PreferentialTax {
                    ordinary_taxable: Decimal::ZERO,
                    pref_taxable: dec!(600000),
                    filing_status: FilingStatusCode::MarriedFilingJointly,
                },
            ]
        );
    }

    #[test]
    fn empty_cells_act_as_absent_fields() {
        let requests = load(&["FED_PREF_TAX_2024,,,1500,"]).unwrap();

        assert_eq!(
            requests,
            vec![CalculationRequest::PreferentialTax {
                ordinary_taxable: Decimal::ZERO,
                pref_taxable: dec!(1500),
                filing_status: FilingStatusCode::Single,
            }]
        );
    }

    #[test]
    fn tolerates_whitespace_around_values() {
        let requests = load(&[" FED_TAX_2025_MFJ , 1000 ,,,"]).unwrap();

        assert_eq!(
            requests,
            vec![CalculationRequest::OrdinaryTax {
                taxable_income: dec!(1000)
            }]
        );
    }

    #[test]
    fn only_calc_column_is_required() {
        let requests =
            load_from_str("calc,pref_taxable\nFED_PREF_TAX_2024,2500", FilingStatusCode::HeadOfHousehold)
                .unwrap();

        assert_eq!(
            requests,
            vec![CalculationRequest::PreferentialTax {
                ordinary_taxable: Decimal::ZERO,
                pref_taxable: dec!(2500),
                filing_status: FilingStatusCode::HeadOfHousehold,
            }]
        );
    }

    #[test]
    fn reports_invalid_row_number() {
        let err = load(&["FED_TAX_2025_MFJ,100,,,", "FED_TAX_2025_MFJ,-3,,,"]).unwrap_err();

        match err {
            CsvLoadError::InvalidRow { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(source, RequestError::InvalidTaxableIncome);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = load(&["FED_TAX_2025_MFJ,100"]).unwrap_err();

        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn missing_calc_column_is_parse_error() {
        let err = load_from_str("taxable_income\n100", FilingStatusCode::Single).unwrap_err();

        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn header_only_gives_empty_batch() {
        assert!(load(&[]).unwrap().is_empty());
    }
}
