//! Integration tests driving the public request boundary end to end.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use tax_api::csv_loader::{self, CsvLoadError};
use tax_api::{ApiConfig, CalculationHandler, RequestError, handle_request, handle_request_json};
use tax_core::FilingStatusCode;

const TEST_BATCH: &str = include_str!("../test-data/requests.csv");

fn tax_of(body: serde_json::Value) -> Decimal {
    handle_request(&body.to_string())
        .expect("request should validate")
        .tax()
}

#[test]
fn test_ordinary_published_values() {
    assert_eq!(tax_of(json!({"calc": "FED_TAX_2025_MFJ", "taxableIncome": 0})), Decimal::ZERO);
    assert_eq!(tax_of(json!({"calc": "FED_TAX_2025_MFJ", "taxableIncome": 23850})), dec!(2385));
    assert_eq!(tax_of(json!({"calc": "FED_TAX_2025_MFJ", "taxableIncome": 96950})), dec!(11157));
}

#[test]
fn test_preferential_published_values() {
    assert_eq!(
        tax_of(json!({"calc": "FED_PREF_TAX_2024", "ordinaryTaxable": 0, "prefTaxable": 40000, "filingStatus": "single"})),
        Decimal::ZERO
    );
    assert_eq!(
        tax_of(json!({"calc": "FED_PREF_TAX_2024", "ordinaryTaxable": 0, "prefTaxable": 600000, "filingStatus": "single"})),
        dec!(86001.25)
    );
}

#[test]
fn test_preferential_ignores_ordinary_tax() {
    // Ordinary income only moves where the preferential slices land.
    let with_ordinary = tax_of(json!({
        "calc": "FED_PREF_TAX_2024",
        "ordinaryTaxable": 30000,
        "prefTaxable": 10000
    }));

    assert_eq!(with_ordinary, Decimal::ZERO);
}

#[test]
fn test_string_amounts_match_numeric_amounts() {
    let numeric = tax_of(json!({"calc": "FED_TAX_2025_MFJ", "taxableIncome": 150000}));
    let string = tax_of(json!({"calc": "FED_TAX_2025_MFJ", "taxableIncome": "150000"}));

    assert_eq!(numeric, string);
}

#[test]
fn test_every_rejection_message() {
    let cases = [
        ("", r#"Missing JSON body. Expected {"calc":"...", ...}."#),
        ("not json", "Invalid JSON body."),
        (r#"{"taxableIncome": 1}"#, "Missing field: calc"),
        (r#"{"calc": "FED_TAX_2025_MFJ", "taxableIncome": -1}"#, "taxableIncome must be a number >= 0"),
        (r#"{"calc": "FED_PREF_TAX_2024", "ordinaryTaxable": -1}"#, "ordinaryTaxable must be a number >= 0"),
        (r#"{"calc": "FED_PREF_TAX_2024", "prefTaxable": -1}"#, "prefTaxable must be a number >= 0"),
        (r#"{"calc": "FED_PREF_TAX_2024", "filingStatus": "joint"}"#, "filingStatus must be one of: single, mfj, mfs, hoh"),
    ];

    for (body, message) in cases {
        let (ok, envelope) = handle_request_json(body);
        assert!(!ok, "body {body:?} should be rejected");
        assert_eq!(envelope, json!({ "error": message }), "body {body:?}");
    }
}

#[test]
fn test_unknown_calc_envelope() {
    let (ok, envelope) = handle_request_json(r#"{"calc": "STATE_TAX"}"#);

    assert!(!ok);
    assert_eq!(
        envelope,
        json!({"error": "Unknown calc.", "allowed": ["FED_TAX_2025_MFJ", "FED_PREF_TAX_2024"]})
    );
}

#[test]
fn test_unknown_filing_status_is_rejected_at_boundary() {
    let err = handle_request(r#"{"calc": "FED_PREF_TAX_2024", "prefTaxable": 1, "filingStatus": "married"}"#)
        .unwrap_err();

    assert_eq!(err, RequestError::InvalidFilingStatus("married".to_string()));
}

#[test]
fn test_preferential_envelope_echoes_inputs() {
    let (ok, envelope) = handle_request_json(
        r#"{"calc": "FED_PREF_TAX_2024", "ordinaryTaxable": "250000", "prefTaxable": 100000, "filingStatus": "MFS"}"#,
    );

    assert!(ok);
    assert_eq!(
        envelope,
        json!({
            "calc": "FED_PREF_TAX_2024",
            "ordinaryTaxable": 250000.0,
            "prefTaxable": 100000.0,
            "filingStatus": "mfs",
            "tax": 17907.5
        })
    );
}

#[test]
fn test_batch_fixture_evaluates_every_row() {
    let handler = CalculationHandler::default();
    let requests =
        csv_loader::load_from_str(TEST_BATCH, FilingStatusCode::Single).expect("Failed to parse CSV");

    let taxes: Vec<Decimal> = requests
        .iter()
        .map(|r| handler.evaluate(r).tax())
        .collect();

    assert_eq!(
        taxes,
        vec![
            Decimal::ZERO,
            dec!(2385),
            dec!(11157),
            dec!(294062.50),
            Decimal::ZERO,
            dec!(86001.25),
            dec!(17907.50),
            dec!(7500),
        ]
    );
}

#[test]
fn test_batch_uses_configured_default_status() {
    let config = ApiConfig {
        default_filing_status: FilingStatusCode::MarriedFilingJointly,
        ..ApiConfig::default()
    };
    let handler = CalculationHandler::new(&config);
    let requests = csv_loader::load_from_str(
        "calc,ordinary_taxable,pref_taxable\nFED_PREF_TAX_2024,0,94050",
        config.default_filing_status,
    )
    .expect("Failed to parse CSV");

    assert_eq!(handler.evaluate(&requests[0]).tax(), Decimal::ZERO);
}

#[test]
fn test_batch_rejects_unknown_status_with_row() {
    let err = csv_loader::load_from_str(
        "calc,pref_taxable,filing_status\nFED_PREF_TAX_2024,10,single\nFED_PREF_TAX_2024,10,married",
        FilingStatusCode::Single,
    )
    .unwrap_err();

    assert!(matches!(err, CsvLoadError::InvalidRow { row: 2, .. }));
    assert_eq!(
        err.to_string(),
        "row 2: filingStatus must be one of: single, mfj, mfs, hoh"
    );
}

#[test]
fn test_missing_batch_file() {
    let err = csv_loader::load_from_file(
        std::path::Path::new("/nonexistent/batch.csv"),
        FilingStatusCode::Single,
    )
    .unwrap_err();

    assert!(matches!(err, CsvLoadError::Io(_)));
}
