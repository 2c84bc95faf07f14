//! Parsing and validation of calculation requests.
//!
//! Request bodies are loose JSON: amounts may arrive as numbers or numeric
//! strings, and several fields are optional. This module is the only place
//! that coercion happens. Everything downstream works with
//! [`CalculationRequest`], whose amounts are already finite, non-negative
//! decimals and whose filing status is a closed [`FilingStatusCode`].
//!
//! | Field             | Absent / null | Non-numeric | Negative, infinite or out of range |
//! |-------------------|---------------|-------------|------------------------------------|
//! | `taxableIncome`   | rejected      | rejected    | rejected                           |
//! | `ordinaryTaxable` | `0`           | `0`         | rejected                           |
//! | `prefTaxable`     | `0`           | `0`         | rejected                           |
//!
//! Infinite means the spelling `Infinity` or a number too large for a float.
//! Out of range means finite but beyond [`Decimal::MAX`]. Words such as `NaN`
//! or `inf` are non-numeric.
//!
//! `filingStatus` falls back to the configured default when absent, null, or
//! blank; any other value must be one of `single`, `mfj`, `mfs`, `hoh`
//! (case-insensitive).

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tax_core::FilingStatusCode;
use tax_core::calculations::common::amount_from_f64;
use thiserror::Error;

/// Names of the calculations a request can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalcName {
    /// 2025 married-filing-jointly ordinary income tax.
    #[serde(rename = "FED_TAX_2025_MFJ")]
    FedTax2025Mfj,
    /// 2024 stacked preferential-rate tax.
    #[serde(rename = "FED_PREF_TAX_2024")]
    FedPrefTax2024,
}

impl CalcName {
    pub const ALL: [Self; 2] = [Self::FedTax2025Mfj, Self::FedPrefTax2024];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FedTax2025Mfj => "FED_TAX_2025_MFJ",
            Self::FedPrefTax2024 => "FED_PREF_TAX_2024",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn allowed() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

impl fmt::Display for CalcName {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a request is turned away before any calculation runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Missing JSON body. Expected {{\"calc\":\"...\", ...}}.")]
    MissingBody,

    #[error("Invalid JSON body.")]
    InvalidJson,

    #[error("Missing field: calc")]
    MissingCalc,

    /// The inner `String` is the name that was asked for.
    #[error("Unknown calc.")]
    UnknownCalc(String),

    #[error("taxableIncome must be a number >= 0")]
    InvalidTaxableIncome,

    #[error("ordinaryTaxable must be a number >= 0")]
    InvalidOrdinaryTaxable,

    #[error("prefTaxable must be a number >= 0")]
    InvalidPrefTaxable,

    #[error("filingStatus must be one of: single, mfj, mfs, hoh")]
    InvalidFilingStatus(String),
}

/// Request fields exactly as they arrived, before any coercion.
///
/// JSON bodies deserialize straight into this; the CSV loader builds it from
/// string cells.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequest {
    pub calc: Option<Value>,
    pub taxable_income: Option<Value>,
    pub ordinary_taxable: Option<Value>,
    pub pref_taxable: Option<Value>,
    pub filing_status: Option<Value>,
}

impl RawRequest {
    /// Decodes a JSON request body.
    ///
    /// A body that is valid JSON but not an object is treated as an object
    /// with no fields, so it fails later on the missing `calc`.
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(RequestError::MissingBody);
        }

        let value: Value = serde_json::from_str(body).map_err(|_| RequestError::InvalidJson)?;
        if !value.is_object() {
            return Ok(Self::default());
        }

        serde_json::from_value(value).map_err(|_| RequestError::InvalidJson)
    }
}

/// A validated calculation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationRequest {
    OrdinaryTax {
        taxable_income: Decimal,
    },
    PreferentialTax {
        ordinary_taxable: Decimal,
        pref_taxable: Decimal,
        filing_status: FilingStatusCode,
    },
}

impl CalculationRequest {
    pub fn calc(&self) -> CalcName {
        match self {
            Self::OrdinaryTax { .. } => CalcName::FedTax2025Mfj,
            Self::PreferentialTax { .. } => CalcName::FedPrefTax2024,
        }
    }

    /// Validates `raw`, applying the coercion rules described at module level.
    ///
    /// `default_status` is used when the request carries no filing status.
    pub fn from_raw(
        raw: &RawRequest,
        default_status: FilingStatusCode,
    ) -> Result<Self, RequestError> {
        let name = match &raw.calc {
            Some(Value::String(name)) => name,
            _ => return Err(RequestError::MissingCalc),
        };
        let calc = CalcName::parse(name).ok_or_else(|| RequestError::UnknownCalc(name.clone()))?;

        match calc {
            CalcName::FedTax2025Mfj => {
                let taxable_income = match raw.taxable_income.as_ref().map(coerce_amount) {
                    Some(Amount::Number(n)) if n >= Decimal::ZERO => n,
                    _ => return Err(RequestError::InvalidTaxableIncome),
                };

                Ok(Self::OrdinaryTax { taxable_income })
            }
            CalcName::FedPrefTax2024 => {
                let filing_status = resolve_filing_status(raw.filing_status.as_ref(), default_status)?;
                let ordinary_taxable = lenient_amount(
                    raw.ordinary_taxable.as_ref(),
                    RequestError::InvalidOrdinaryTaxable,
                )?;
                let pref_taxable =
                    lenient_amount(raw.pref_taxable.as_ref(), RequestError::InvalidPrefTaxable)?;

                Ok(Self::PreferentialTax {
                    ordinary_taxable,
                    pref_taxable,
                    filing_status,
                })
            }
        }
    }
}

/// Outcome of reading one loose amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Amount {
    Number(Decimal),
    NotANumber,
    NonFinite,
    /// Finite, but beyond what a [`Decimal`] can hold.
    OutOfRange,
}

/// Reads a number or numeric string. A blank string counts as zero.
fn coerce_amount(value: &Value) -> Amount {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Amount::Number(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Amount::Number(Decimal::from(u))
            } else {
                parse_amount(&n.to_string())
            }
        }
        Value::String(s) => parse_amount(s),
        _ => Amount::NotANumber,
    }
}

/// Only the exact spelling `Infinity` (optionally signed) reads as infinite;
/// other float keywords such as `inf` or `NaN` are not numbers.
fn parse_amount(s: &str) -> Amount {
    let s = s.trim();
    if s.is_empty() {
        return Amount::Number(Decimal::ZERO);
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned == "Infinity" {
        return Amount::NonFinite;
    }
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Amount::NotANumber;
    }

    if let Ok(d) = Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)) {
        return Amount::Number(d);
    }

    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => amount_from_f64(f).map_or(Amount::OutOfRange, Amount::Number),
        Ok(_) => Amount::NonFinite,
        Err(_) => Amount::NotANumber,
    }
}

/// Absent or non-numeric becomes zero; negative, infinite or out of range is `error`.
fn lenient_amount(
    value: Option<&Value>,
    error: RequestError,
) -> Result<Decimal, RequestError> {
    match value.map(coerce_amount) {
        None | Some(Amount::NotANumber) => Ok(Decimal::ZERO),
        Some(Amount::Number(n)) if n >= Decimal::ZERO => Ok(n),
        Some(_) => Err(error),
    }
}

fn resolve_filing_status(
    value: Option<&Value>,
    default_status: FilingStatusCode,
) -> Result<FilingStatusCode, RequestError> {
    match value {
        None => Ok(default_status),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(default_status),
        Some(Value::String(s)) => {
            FilingStatusCode::parse(s).ok_or_else(|| RequestError::InvalidFilingStatus(s.clone()))
        }
        Some(other) => Err(RequestError::InvalidFilingStatus(other.to_string())),
    }
}
