//! # CT Bridge
//!
//! Proof generation and verification for a multi-party wallet signing protocol.
//!
//! - [`RangeProofBridge`] proves and verifies batched range proofs with all
//!   randomness drawn from a reseeded [`EntropyRatchet`], so co-signers
//!   holding the same seed stay in lockstep
//! - [`RingSignatureBridge`] signs and verifies CLSAG ring signatures
//! - [`CtBridge`] owns the process-wide ratchet and exposes both over flat
//!   byte buffers
//!
//! Verification never fails loudly. Malformed input, rejected proofs and
//! faults inside the proof math all come back as [`Verification`] values,
//! which collapse to `false` at the boolean entry points.
//!
//! ```rust,no_run
//! use ct_bridge::{BridgeConfig, CtBridge};
//!
//! let bridge = CtBridge::new(&BridgeConfig::default()).unwrap();
//! let seed = [0u8; 32];
//! let amounts: Vec<u8> = [5u64, 10].iter().flat_map(|a| a.to_le_bytes()).collect();
//! let masks = [[1u8; 32], [2u8; 32]].concat();
//! let blob = bridge.generate_range_proof(&seed, 2, &amounts, &masks).unwrap();
//! # let commitments = vec![0u8; 64];
//! let ok = bridge.verify_range_proof(&seed, blob.as_bytes(), 2, &commitments);
//! ```

pub mod boundary;
pub mod outcome;
pub mod range;
pub mod ring;


pub use boundary::CtBridge;
pub use outcome::{fault_boundary, Verification};
pub use range::RangeProofBridge;
pub use ring::RingSignatureBridge;

pub use ct_core::{BridgeConfig, BridgeError, BridgeResult, EncodedBlob, EntropyRatchet, Framing};
