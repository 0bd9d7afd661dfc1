//! Error types for bridge operations

use thiserror::Error;

/// Main error type for bridge operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Length or count mismatch detected before any proof math runs
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed wire encoding
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// The proof math rejected the proof or faulted
    #[error("Proof verification failed")]
    VerificationFailed,

    /// Configuration rejected by validation or failed to load
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BridgeError {
    /// Shorthand for [`BridgeError::InvalidInput`]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Shorthand for [`BridgeError::DecodeError`]
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }

    /// Whether the error describes caller input rather than a failed proof
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::DecodeError(_))
    }
}

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
