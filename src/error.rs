//! Error types for race email parsing
//!
//! Unrecognized subjects and malformed rows are not errors; they surface as
//! `None` or as skipped rows in the scan diagnostics. These variants cover
//! caller faults only.

use thiserror::Error;

/// Errors raised for invalid inputs handed to the parser
#[derive(Error, Debug)]
pub enum ParseError {
    /// Failed to parse the raw message structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Missing required header
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// Parser configuration is unusable
    #[error("Invalid parser configuration: {0}")]
    InvalidConfig(String),

    /// Configuration document could not be read
    #[error("Failed to read configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for race parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
