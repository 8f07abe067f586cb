//! Parser configuration

use crate::error::{ParseError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lead-in phrase of the vendor's result notification subject
pub const DEFAULT_LEAD_IN: &str = "Your Race Results at";

/// Vendor name; prefixed to every parsed location
pub const DEFAULT_VENDOR: &str = "K1 Speed";

/// Century added to two-digit subject years
pub const DEFAULT_CENTURY_BASE: i32 = 2000;

/// Settings for recognizing the vendor's subject lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserConfig {
    /// Literal phrase the subject starts with (matched case-insensitively)
    pub lead_in: String,

    /// Vendor name following the lead-in, e.g. "K1 Speed"
    pub vendor: String,

    /// Added to years below 100. No century inference is attempted.
    pub century_base: i32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            lead_in: DEFAULT_LEAD_IN.to_string(),
            vendor: DEFAULT_VENDOR.to_string(),
            century_base: DEFAULT_CENTURY_BASE,
        }
    }
}

impl ParserConfig {
    /// Load a configuration from a JSON document. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the subject parser cannot use
    pub fn validate(&self) -> Result<()> {
        if self.lead_in.trim().is_empty() {
            return Err(ParseError::InvalidConfig("lead-in must not be empty".into()));
        }
        if self.vendor.trim().is_empty() {
            return Err(ParseError::InvalidConfig("vendor must not be empty".into()));
        }

        // Two-digit years span base..=base + 99; all of it must be a valid year.
        let years = NaiveDate::MIN.year()..=NaiveDate::MAX.year() - 99;
        if !years.contains(&self.century_base) {
            return Err(ParseError::InvalidConfig(format!(
                "century base {} is outside {}..={}",
                self.century_base,
                years.start(),
                years.end()
            )));
        }
        Ok(())
    }
}
