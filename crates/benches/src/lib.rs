//! Benchmarks for the confidential transaction bridge
//!
//! This crate contains performance benchmarks for:
//! - Entropy ratchet throughput
//! - Batched range proof generation and verification
//! - CLSAG signing and verification across ring sizes
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench -p benches
//! ```
//!
//! Or run specific benchmarks:
//! ```bash
//! cargo bench -p benches --bench range_proof
//! cargo bench -p benches --bench ring_signature
//! ```

pub use ct_bridge::*;
