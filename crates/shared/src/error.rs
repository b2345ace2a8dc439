//! Error types for the fallible edges of the currency mask.
//!
//! The mask itself never fails: malformed input degrades to zero. These
//! errors only surface from strict parsing, amount validation, key-name
//! parsing, and configuration loading.

use thiserror::Error;

/// Result type alias using `MaskError`.
pub type MaskResult<T> = Result<T, MaskError>;

/// Currency mask error types.
#[derive(Debug, Error)]
pub enum MaskError {
    /// Text could not be read as a monetary amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Amount cannot be negative.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(String),

    /// Amount has more than two fractional digits.
    #[error("Amount has sub-cent precision: {0}")]
    SubCentPrecision(String),

    /// Key name is not a recognised key.
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MaskError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            Self::SubCentPrecision(_) => "SUB_CENT_PRECISION",
            Self::UnknownKey(_) => "UNKNOWN_KEY",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<config::ConfigError> for MaskError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
