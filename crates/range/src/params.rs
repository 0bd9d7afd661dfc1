//! Generators and limits shared by provers and verifiers

use crate::{RangeError, RangeResult};
use bulletproofs::{BulletproofGens, PedersenGens};
use ct_core::{pedersen_gens, BridgeConfig};

/// Transcript label binding proofs to this protocol
pub const RANGE_TRANSCRIPT_LABEL: &[u8] = b"ct-bridge/range-proof/v1";

/// Public parameters for a family of range proofs
///
/// Both sides must build these from the same configuration.
#[derive(Clone)]
pub struct RangeParameters {
    bp_gens: BulletproofGens,
    pc_gens: PedersenGens,
    bits: usize,
    max_batch: usize,
}

impl RangeParameters {
    pub fn new(config: &BridgeConfig) -> RangeResult<Self> {
        config
            .validate()
            .map_err(|e| RangeError::InvalidParameters(e.to_string()))?;
        Ok(Self {
            bp_gens: BulletproofGens::new(config.range_bits, config.padded_max_batch()),
            pc_gens: pedersen_gens(),
            bits: config.range_bits,
            max_batch: config.max_batch,
        })
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Largest number of caller commitments in one proof
    pub fn max_batch(&self) -> usize {
        self.max_batch
    }

    /// Largest aggregated batch, padding included
    pub fn party_capacity(&self) -> usize {
        self.bp_gens.party_capacity
    }

    pub(crate) fn bp_gens(&self) -> &BulletproofGens {
        &self.bp_gens
    }

    pub(crate) fn pc_gens(&self) -> &PedersenGens {
        &self.pc_gens
    }

    /// Smallest power-of-two batch holding `count` commitments
    pub fn padded_len(count: usize) -> usize {
        count.max(1).next_power_of_two()
    }
}

impl std::fmt::Debug for RangeParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeParameters")
            .field("bits", &self.bits)
            .field("max_batch", &self.max_batch)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::{Commitment, Scalar};

    #[test]
    fn test_capacity_follows_config() {
        let config = BridgeConfig {
            max_batch: 5,
            range_bits: 32,
            ..BridgeConfig::default()
        };
        let params = RangeParameters::new(&config).unwrap();
        assert_eq!(params.bits(), 32);
        assert_eq!(params.max_batch(), 5);
        assert_eq!(params.party_capacity(), 8);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BridgeConfig {
            range_bits: 12,
            ..BridgeConfig::default()
        };
        assert!(matches!(
            RangeParameters::new(&config),
            Err(RangeError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_pedersen_gens_match_commitments() {
        let params = RangeParameters::new(&BridgeConfig::default()).unwrap();
        let mask = Scalar::from(11u64);
        assert_eq!(
            params.pc_gens().commit(Scalar::from(7u64), mask),
            Commitment::new(mask, 7).calculate()
        );
    }

    #[test]
    fn test_padded_len() {
        assert_eq!(RangeParameters::padded_len(1), 1);
        assert_eq!(RangeParameters::padded_len(2), 2);
        assert_eq!(RangeParameters::padded_len(3), 4);
        assert_eq!(RangeParameters::padded_len(16), 16);
        assert_eq!(RangeParameters::padded_len(255), 256);
    }
}
