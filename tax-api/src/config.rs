use std::path::{Path, PathBuf};

use serde::Deserialize;
use tax_core::FilingStatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the calculation boundary and the `tax-calc` binary.
///
/// Every key is optional in the TOML file; missing keys take the values from
/// [`ApiConfig::default`].
///
/// ```toml
/// log_filter = "debug"
/// pretty = true
/// default_filing_status = "mfj"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Pretty-print JSON envelopes.
    pub pretty: bool,
    /// Filing status for preferential requests that omit one.
    pub default_filing_status: FilingStatusCode,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            pretty: false,
            default_filing_status: FilingStatusCode::Single,
        }
    }
}

impl ApiConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(ApiConfig::from_toml_str("").unwrap(), ApiConfig::default());
    }

    #[test]
    fn reads_every_key() {
        let config = ApiConfig::from_toml_str(
            r#"
            log_filter = "tax_api=debug"
            pretty = true
            default_filing_status = "hoh"
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            ApiConfig {
                log_filter: "tax_api=debug".to_string(),
                pretty: true,
                default_filing_status: FilingStatusCode::HeadOfHousehold,
            }
        );
    }

    #[test]
    fn rejects_unknown_status() {
        let err = ApiConfig::from_toml_str(r#"default_filing_status = "married""#).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(ApiConfig::from_toml_str("colour = true").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ApiConfig::load(Path::new("/nonexistent/tax-calc.toml")).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/tax-calc.toml"));
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(ApiConfig::load_or_default(None).unwrap(), ApiConfig::default());
    }
}
