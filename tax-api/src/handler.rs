//! Request dispatch: raw body in, envelope out.
//!
//! The handler knows nothing about transports. A Lambda adapter, an HTTP
//! server, or the `tax-calc` binary hands it the request body and sends back
//! whatever it returns.

use serde_json::Value;
use tax_core::FilingStatusCode;
use tax_core::calculations::{ordinary_bracket_tax, stacked_preferential_tax};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::request::{CalculationRequest, RawRequest, RequestError};
use crate::response::{
    CalculationResponse, ErrorResponse, OrdinaryTaxResponse, PreferentialTaxResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationHandler {
    default_filing_status: FilingStatusCode,
}

impl Default for CalculationHandler {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}

impl CalculationHandler {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            default_filing_status: config.default_filing_status,
        }
    }

    /// Decodes, validates and evaluates one JSON request body.
    pub fn handle(
        &self,
        body: &str,
    ) -> Result<CalculationResponse, RequestError> {
        let raw = RawRequest::from_json(body)?;
        let request = self.validate(&raw)?;
        Ok(self.evaluate(&request))
    }

    /// Like [`handle`](Self::handle), but folds errors into an error envelope.
    ///
    /// Returns whether the request succeeded alongside the JSON body.
    pub fn handle_json(
        &self,
        body: &str,
    ) -> (bool, Value) {
        let result = match self.handle(body) {
            Ok(response) => serde_json::to_value(&response).map(|v| (true, v)),
            Err(err) => serde_json::to_value(ErrorResponse::from(&err)).map(|v| (false, v)),
        };

        result.unwrap_or_else(|e| (false, serde_json::json!({ "error": e.to_string() })))
    }

    pub fn validate(
        &self,
        raw: &RawRequest,
    ) -> Result<CalculationRequest, RequestError> {
        CalculationRequest::from_raw(raw, self.default_filing_status).inspect_err(|err| {
            warn!(error = %err, "rejected calculation request");
        })
    }

    /// Runs the calculation for an already validated request.
    pub fn evaluate(
        &self,
        request: &CalculationRequest,
    ) -> CalculationResponse {
        debug!(calc = %request.calc(), "evaluating calculation");

        match *request {
            CalculationRequest::OrdinaryTax { taxable_income } => {
                CalculationResponse::OrdinaryTax(OrdinaryTaxResponse {
                    calc: request.calc(),
                    taxable_income,
                    tax: ordinary_bracket_tax(taxable_income),
                })
            }
            CalculationRequest::PreferentialTax {
                ordinary_taxable,
                pref_taxable,
                filing_status,
            } => CalculationResponse::PreferentialTax(PreferentialTaxResponse {
                calc: request.calc(),
                ordinary_taxable,
                pref_taxable,
                filing_status,
                tax: stacked_preferential_tax(ordinary_taxable, pref_taxable, filing_status),
            }),
        }
    }
}

/// [`CalculationHandler::handle`] with the default configuration.
pub fn handle_request(body: &str) -> Result<CalculationResponse, RequestError> {
    CalculationHandler::default().handle(body)
}

/// [`CalculationHandler::handle_json`] with the default configuration.
pub fn handle_request_json(body: &str) -> (bool, Value) {
    CalculationHandler::default().handle_json(body)
}
