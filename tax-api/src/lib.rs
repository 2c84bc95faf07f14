pub mod config;
pub mod csv_loader;
pub mod handler;
pub mod logging;
pub mod request;
pub mod response;

pub use config::{ApiConfig, ConfigError};
pub use handler::{CalculationHandler, handle_request, handle_request_json};
pub use request::{CalcName, CalculationRequest, RawRequest, RequestError};
pub use response::{CalculationResponse, ErrorResponse};
