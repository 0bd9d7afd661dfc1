//! Verification outcomes and the fault boundary around proof math

use ct_core::{BridgeError, BridgeResult};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::warn;

/// Result of a verification call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// The proof checks out
    Valid,
    /// The inputs were well formed but the proof did not verify
    Invalid,
    /// The inputs could not be interpreted
    Malformed(BridgeError),
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<BridgeResult<()>> for Verification {
    fn from(result: BridgeResult<()>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(err) if err.is_malformed() => Self::Malformed(err),
            Err(_) => Self::Invalid,
        }
    }
}

impl From<Verification> for bool {
    fn from(outcome: Verification) -> bool {
        outcome.is_valid()
    }
}

/// Run `f`, turning a panic inside it into [`BridgeError::VerificationFailed`]
pub fn fault_boundary<T, F>(operation: &'static str, f: F) -> BridgeResult<T>
where
    F: FnOnce() -> BridgeResult<T>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(_) => {
            warn!(operation, "fault caught at bridge boundary");
            Err(BridgeError::VerificationFailed)
        }
    }
}
