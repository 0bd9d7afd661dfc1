//! # CT Core
//!
//! Foundations shared by the range proof and ring signature bridges:
//!
//! - A deterministic entropy ratchet, so co-signers derive identical proof
//!   randomness from a shared seed
//! - A total map from 32-byte digests onto Ristretto points
//! - Pedersen generators and commitment openings
//! - The versioned, framed wire codec proof objects cross the bridge in
//! - Error types and configuration
//!
//! ## Commitments
//!
//! ```text
//! C = amount·H + mask·G
//! ```
//! where `G` is the Ristretto basepoint and `H = hash_to_point(G)`.

pub mod codec;
pub mod commitment;
pub mod config;
pub mod errors;
pub mod point;
pub mod ratchet;


pub use codec::*;
pub use commitment::*;
pub use config::*;
pub use errors::*;
pub use point::*;
pub use ratchet::*;

/// Re-export commonly used types from curve25519-dalek
pub use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
};
