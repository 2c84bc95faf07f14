use std::fmt;

use serde::{Deserialize, Serialize};

/// Household category that selects the preferential-rate thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilingStatusCode {
    #[default]
    #[serde(alias = "SINGLE", alias = "Single")]
    Single,
    #[serde(rename = "mfj", alias = "MFJ")]
    MarriedFilingJointly,
    #[serde(rename = "mfs", alias = "MFS")]
    MarriedFilingSeparately,
    #[serde(rename = "hoh", alias = "HOH")]
    HeadOfHousehold,
}

impl FilingStatusCode {
    /// Every supported status, in tag order.
    pub const ALL: [Self; 4] = [
        Self::Single,
        Self::MarriedFilingJointly,
        Self::MarriedFilingSeparately,
        Self::HeadOfHousehold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedFilingJointly => "mfj",
            Self::MarriedFilingSeparately => "mfs",
            Self::HeadOfHousehold => "hoh",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married Filing Jointly",
            Self::MarriedFilingSeparately => "Married Filing Separately",
            Self::HeadOfHousehold => "Head of Household",
        }
    }

    /// Strict, case-insensitive tag lookup. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Some(Self::Single),
            "mfj" => Some(Self::MarriedFilingJointly),
            "mfs" => Some(Self::MarriedFilingSeparately),
            "hoh" => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }

    /// Like [`parse`](Self::parse), but unknown tags resolve to `Single`.
    pub fn parse_or_single(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl fmt::Display for FilingStatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
