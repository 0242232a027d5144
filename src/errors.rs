//! Engine error taxonomy
//!
//! All errors are local, synchronous and non-retryable: they describe a
//! malformed input or configuration, never a transient condition.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Empty/NaN/Inf-bearing series, mismatched lengths, insufficient
    /// window length, malformed OHLC ordering.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Weights not summing to ~1.0, non-positive account balance, risk
    /// fraction outside (0, 0.10].
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Semantically invalid trade parameters (entry equals stop, negative
    /// prices, reward ratio <= 0).
    #[error("invalid trade parameters: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
