//! # CLSAG
//!
//! Concise linkable spontaneous anonymous group signatures over Ristretto,
//! extended with commitment balancing for confidential transactions.
//!
//! A signature over a ring of `(P_i, C_i)` members shows that:
//!
//! - the signer knows `x` with `P_π = x·G` for some hidden index `π`
//! - the key image is `I = x·Hp(P_π)`, so a second spend of `x` is linkable
//! - `C_π - pseudo_out` is a commitment to zero, so the pseudo-out carries the
//!   same amount as the real input
//!
//! ## Mathematical Background
//!
//! With aggregation coefficients `mu_P`, `mu_C` and round challenges `c_i`:
//! ```text
//! L_i = s_i·G      + c_i·mu_P·P_i + c_i·mu_C·(C_i - pseudo_out)
//! R_i = s_i·Hp(P_i) + c_i·mu_P·I   + c_i·mu_C·D
//! c_{i+1} = H(ring, pseudo_out, msg, L_i, R_i)
//! ```
//! The signature `(c_1, s, D)` verifies when the ring closes on `c_1`.

mod ring_loop;
pub mod proof;
pub mod signer;
pub mod verifier;


pub use proof::*;
pub use signer::*;

use thiserror::Error;

/// Errors when signing or verifying CLSAGs
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClsagError {
    /// The ring was empty, too large, or the signer index was outside it
    #[error("invalid ring")]
    InvalidRing,

    /// The secret key does not open the signer's ring member
    #[error("invalid key")]
    InvalidKey,

    /// The commitment opening does not match the signer's ring member
    #[error("invalid commitment")]
    InvalidCommitment,

    /// The key image was the identity
    #[error("invalid key image")]
    InvalidImage,

    /// The `D` component was the identity
    #[error("invalid D")]
    InvalidD,

    /// The `s` vector length did not match the ring
    #[error("invalid s")]
    InvalidS,

    /// The ring did not close on `c1`
    #[error("invalid c1")]
    InvalidC1,
}

impl From<ClsagError> for ct_core::BridgeError {
    fn from(err: ClsagError) -> Self {
        match err {
            ClsagError::InvalidImage | ClsagError::InvalidD | ClsagError::InvalidC1 => {
                Self::VerificationFailed
            }
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
