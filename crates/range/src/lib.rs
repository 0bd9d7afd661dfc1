//! # Batched Range Proofs
//!
//! Aggregated Bulletproofs showing that every committed amount in a batch lies
//! in `[0, 2^n)` without revealing it.
//!
//! ## Mathematical Background
//!
//! For a batch of `m` commitments `V_j = v_j·H + γ_j·G` the prover shows, with a
//! single logarithmic-size argument, that each `v_j` decomposes into `n` bits:
//!
//! 1. **Bit Decomposition**: `v_j = Σ(a_{j,i}·2^i)` with `a_{j,i} ∈ {0,1}`
//! 2. **Vector Commitment**: commit to the bits and their complements
//! 3. **Inner Product Argument**: prove the bit constraints hold for the whole batch
//!
//! The aggregated argument needs `m` to be a power of two. Batches of any other
//! size are padded with commitments to zero whose masks come from the prover's
//! RNG; the padding commitments travel inside the encoded proof so a verifier
//! holding only the caller's commitments can rebuild the full batch.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ct_core::{BridgeConfig, Commitment, EntropyRatchet, Scalar};
//! use range::{RangeParameters, RangeProver, RangeVerifier};
//!
//! let params = RangeParameters::new(&BridgeConfig::default()).unwrap();
//! let mut rng = EntropyRatchet::from_seed(&[0u8; 32]);
//!
//! let openings = [Commitment::new(Scalar::from(3u64), 42)];
//! let (proof, commitments) = RangeProver::new(&params).prove(&mut rng, &openings).unwrap();
//! assert!(RangeVerifier::new(&params)
//!     .verify(&mut rng, &proof, &commitments)
//!     .is_ok());
//! ```

pub mod params;
pub mod proof;
pub mod prover;
pub mod verifier;

#[cfg(test)]
mod property_tests;

pub use params::*;
pub use proof::*;
pub use prover::*;
pub use verifier::*;

use thiserror::Error;

/// Errors from range proof generation and verification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Batch size, bit width or amounts outside what the parameters allow
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The caller supplied a different number of commitments than the proof covers
    #[error("Commitment count mismatch: proof covers {expected}, got {actual}")]
    CommitmentCountMismatch { expected: usize, actual: usize },

    /// The Bulletproofs argument itself failed
    #[error("Proof error: {0}")]
    Proof(String),
}

impl From<bulletproofs::ProofError> for RangeError {
    fn from(err: bulletproofs::ProofError) -> Self {
        Self::Proof(format!("{:?}", err))
    }
}

impl From<RangeError> for ct_core::BridgeError {
    fn from(err: RangeError) -> Self {
        match err {
            RangeError::Proof(_) => Self::VerificationFailed,
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

/// Result type for range proof operations
pub type RangeResult<T> = Result<T, RangeError>;
