//! JSON envelopes returned to the caller.
//!
//! Amounts are written as JSON numbers.

use rust_decimal::Decimal;
use serde::Serialize;
use tax_core::FilingStatusCode;

use crate::request::{CalcName, RequestError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdinaryTaxResponse {
    pub calc: CalcName,
    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferentialTaxResponse {
    pub calc: CalcName,
    #[serde(with = "rust_decimal::serde::float")]
    pub ordinary_taxable: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub pref_taxable: Decimal,
    pub filing_status: FilingStatusCode,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
}

/// Successful calculation, echoing the validated inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CalculationResponse {
    OrdinaryTax(OrdinaryTaxResponse),
    PreferentialTax(PreferentialTaxResponse),
}

impl CalculationResponse {
    pub fn calc(&self) -> CalcName {
        match self {
            Self::OrdinaryTax(r) => r.calc,
            Self::PreferentialTax(r) => r.calc,
        }
    }

    pub fn tax(&self) -> Decimal {
        match self {
            Self::OrdinaryTax(r) => r.tax,
            Self::PreferentialTax(r) => r.tax,
        }
    }
}

/// Body sent back for a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<&'static str>>,
}

impl From<&RequestError> for ErrorResponse {
    fn from(err: &RequestError) -> Self {
        let allowed = match err {
            RequestError::UnknownCalc(_) => Some(CalcName::allowed()),
            _ => None,
        };

        Self {
            error: err.to_string(),
            allowed,
        }
    }
}
