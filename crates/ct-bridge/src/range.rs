//! Range Proof Bridge

use crate::outcome::{fault_boundary, Verification};
use ct_core::{
    decode, encode, scalar_from_bytes, BridgeConfig, BridgeError, BridgeResult, Commitment,
    CompressedRistretto, EncodedBlob, EntropyRatchet, Framing, SEED_LEN,
};
use rand_core::{CryptoRng, RngCore};
use range::{AggregatedRangeProof, RangeParameters, RangeProver, RangeVerifier};
use tracing::{debug, trace};

/// Deterministic batched range proofs over caller-supplied commitments
///
/// Every call reseeds the ratchet it is handed, so two parties holding the same
/// seed produce byte-identical proofs and draw identical verification weights.
#[derive(Debug, Clone)]
pub struct RangeProofBridge {
    params: RangeParameters,
    framing: Framing,
}

impl RangeProofBridge {
    pub fn new(config: &BridgeConfig) -> BridgeResult<Self> {
        config.validate()?;
        Ok(Self {
            params: RangeParameters::new(config)?,
            framing: config.framing,
        })
    }

    pub fn framing(&self) -> Framing {
        self.framing
    }

    pub fn max_batch(&self) -> usize {
        self.params.max_batch()
    }

    /// Prove `amounts[i]` is in range under `masks[i]`, for every `i`
    pub fn prove(
        &self,
        ratchet: &mut EntropyRatchet,
        seed: &[u8; SEED_LEN],
        amounts: &[u64],
        masks: &[[u8; 32]],
    ) -> BridgeResult<EncodedBlob> {
        if amounts.len() != masks.len() {
            return Err(rejected(BridgeError::invalid_input(format!(
                "{} amounts but {} masks",
                amounts.len(),
                masks.len()
            ))));
        }
        let openings = amounts
            .iter()
            .zip(masks)
            .map(|(&amount, mask)| {
                scalar_from_bytes(mask)
                    .map(|mask| Commitment::new(mask, amount))
                    .ok_or_else(|| BridgeError::invalid_input("non-canonical mask"))
            })
            .collect::<BridgeResult<Vec<_>>>()
            .map_err(rejected)?;
        self.prove_commitments(ratchet, seed, &openings)
    }

    /// Prove a batch of commitment openings
    pub fn prove_commitments(
        &self,
        ratchet: &mut EntropyRatchet,
        seed: &[u8; SEED_LEN],
        openings: &[Commitment],
    ) -> BridgeResult<EncodedBlob> {
        self.check_count(openings.len()).map_err(rejected)?;

        ratchet.reseed(seed);
        let params = &self.params;
        let (proof, _) = fault_boundary("range prove", || {
            Ok(RangeProver::new(params).prove(ratchet, openings)?)
        })?;
        let blob = encode(&proof, self.framing)?;
        trace!(count = openings.len(), bytes = blob.len(), "range proof generated");
        Ok(blob)
    }

    /// Prove with a seed drawn from `rng`, returning the seed alongside the blob
    pub fn prove_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        ratchet: &mut EntropyRatchet,
        amounts: &[u64],
        masks: &[[u8; 32]],
    ) -> BridgeResult<([u8; SEED_LEN], EncodedBlob)> {
        let mut seed = [0u8; SEED_LEN];
        rng.fill_bytes(&mut seed);
        let blob = self.prove(ratchet, &seed, amounts, masks)?;
        Ok((seed, blob))
    }

    /// Verify `blob` against the commitments it was proven for, in order
    pub fn check(
        &self,
        ratchet: &mut EntropyRatchet,
        seed: &[u8; SEED_LEN],
        blob: &[u8],
        commitments: &[[u8; 32]],
    ) -> Verification {
        ratchet.reseed(seed);
        let outcome = Verification::from(self.verify_seeded(ratchet, blob, commitments));
        if let Verification::Malformed(err) = &outcome {
            debug!(%err, "range proof input rejected");
        }
        outcome
    }

    /// [`Self::check`] collapsed to pass/fail
    pub fn verify(
        &self,
        ratchet: &mut EntropyRatchet,
        seed: &[u8; SEED_LEN],
        blob: &[u8],
        commitments: &[[u8; 32]],
    ) -> bool {
        self.check(ratchet, seed, blob, commitments).into()
    }

    /// Verify with a seed drawn from `rng`
    pub fn verify_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        ratchet: &mut EntropyRatchet,
        blob: &[u8],
        commitments: &[[u8; 32]],
    ) -> bool {
        let mut seed = [0u8; SEED_LEN];
        rng.fill_bytes(&mut seed);
        self.verify(ratchet, &seed, blob, commitments)
    }

    fn verify_seeded(
        &self,
        ratchet: &mut EntropyRatchet,
        blob: &[u8],
        commitments: &[[u8; 32]],
    ) -> BridgeResult<()> {
        self.check_count(commitments.len())?;
        let proof: AggregatedRangeProof = decode(blob, self.framing)?;
        if proof.count() != commitments.len() {
            return Err(BridgeError::invalid_input(format!(
                "proof covers {} commitments, {} supplied",
                proof.count(),
                commitments.len()
            )));
        }

        let commitments = commitments
            .iter()
            .map(|bytes| {
                let commitment = CompressedRistretto(*bytes);
                commitment
                    .decompress()
                    .map(|_| commitment)
                    .ok_or_else(|| BridgeError::invalid_input("invalid commitment point"))
            })
            .collect::<BridgeResult<Vec<_>>>()?;

        let params = &self.params;
        fault_boundary("range verify", || {
            Ok(RangeVerifier::new(params).verify(ratchet, &proof, &commitments)?)
        })
    }

    fn check_count(&self, count: usize) -> BridgeResult<()> {
        if count == 0 {
            return Err(BridgeError::invalid_input("empty batch"));
        }
        if count > self.max_batch() {
            return Err(BridgeError::invalid_input(format!(
                "batch of {} exceeds the limit of {}",
                count,
                self.max_batch()
            )));
        }
        Ok(())
    }
}

fn rejected(err: BridgeError) -> BridgeError {
    debug!(%err, "range proof input rejected");
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: [u8; 32] = [0u8; 32];
    const MASKS: [[u8; 32]; 2] = [[1u8; 32], [2u8; 32]];

    fn bridge() -> RangeProofBridge {
        RangeProofBridge::new(&BridgeConfig::default()).unwrap()
    }

    fn commit(amount: u64, mask: &[u8; 32]) -> [u8; 32] {
        Commitment::new(scalar_from_bytes(mask).unwrap(), amount)
            .calculate()
            .compress()
            .to_bytes()
    }

    #[test]
    fn test_scenario_deterministic_proof_verifies() {
        let bridge = bridge();
        let mut ratchet = EntropyRatchet::new();
        let blob = bridge.prove(&mut ratchet, &SEED, &[5, 10], &MASKS).unwrap();

        let mut other = EntropyRatchet::from_seed(&[9u8; 32]);
        other.generate(77);
        let again = bridge.prove(&mut other, &SEED, &[5, 10], &MASKS).unwrap();
        assert_eq!(hex::encode(blob.as_bytes()), hex::encode(again.as_bytes()));

        let commitments = [commit(5, &MASKS[0]), commit(10, &MASKS[1])];
        assert_eq!(
            bridge.check(&mut ratchet, &SEED, blob.as_bytes(), &commitments),
            Verification::Valid
        );
    }

    #[test]
    fn test_scenario_wrong_amount_fails() {
        let bridge = bridge();
        let mut ratchet = EntropyRatchet::new();
        let blob = bridge.prove(&mut ratchet, &SEED, &[5, 10], &MASKS).unwrap();
        let commitments = [commit(6, &MASKS[0]), commit(10, &MASKS[1])];
        assert_eq!(
            bridge.check(&mut ratchet, &SEED, blob.as_bytes(), &commitments),
            Verification::Invalid
        );
    }

    #[test]
    fn test_scenario_empty_inputs_rejected() {
        let bridge = bridge();
        let mut ratchet = EntropyRatchet::new();
        assert!(matches!(
            bridge.prove(&mut ratchet, &SEED, &[], &[]),
            Err(BridgeError::InvalidInput(_))
        ));

        let blob = bridge.prove(&mut ratchet, &SEED, &[5, 10], &MASKS).unwrap();
        assert!(matches!(
            bridge.check(&mut ratchet, &SEED, blob.as_bytes(), &[]),
            Verification::Malformed(BridgeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_mismatched_inputs_rejected() {
        let bridge = bridge();
        let mut ratchet = EntropyRatchet::new();
        assert!(matches!(
            bridge.prove(&mut ratchet, &SEED, &[5], &MASKS),
            Err(BridgeError::InvalidInput(_))
        ));
        assert!(matches!(
            bridge.prove(&mut ratchet, &SEED, &[5], &[[0xff; 32]]),
            Err(BridgeError::InvalidInput(_))
        ));
        assert!(matches!(
            bridge.prove(&mut ratchet, &SEED, &[1; 17], &[[1u8; 32]; 17]),
            Err(BridgeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_count_mismatch_is_malformed() {
        let bridge = bridge();
        let mut ratchet = EntropyRatchet::new();
        let blob = bridge.prove(&mut ratchet, &SEED, &[5, 10], &MASKS).unwrap();
        let commitments = [commit(5, &MASKS[0]), commit(10, &MASKS[1]), commit(0, &MASKS[0])];
        assert!(matches!(
            bridge.check(&mut ratchet, &SEED, blob.as_bytes(), &commitments),
            Verification::Malformed(BridgeError::InvalidInput(_))
        ));
        assert!(!bridge.verify(&mut ratchet, &SEED, blob.as_bytes(), &commitments[..1]));
        assert!(!bridge.verify(&mut ratchet, &SEED, blob.as_bytes(), &[[7u8; 32]; 255]));
    }

    #[test]
    fn test_truncated_and_corrupted_blobs_fail() {
        let bridge = bridge();
        let mut ratchet = EntropyRatchet::new();
        let blob = bridge.prove(&mut ratchet, &SEED, &[5, 10], &MASKS).unwrap();
        let commitments = [commit(5, &MASKS[0]), commit(10, &MASKS[1])];
        let bytes = blob.as_bytes();

        for len in [0, 1, 2, 3, bytes.len() / 2, bytes.len() - 1] {
            assert!(!bridge.verify(&mut ratchet, &SEED, &bytes[..len], &commitments));
        }

        let mut tagged = bytes.to_vec();
        tagged[3] = 0x43;
        assert!(matches!(
            bridge.check(&mut ratchet, &SEED, &tagged, &commitments),
            Verification::Malformed(BridgeError::DecodeError(_))
        ));

        let mut trailing = bytes.to_vec();
        trailing.push(0);
        assert!(!bridge.verify(&mut ratchet, &SEED, &trailing, &commitments));

        let mut flipped = bytes.to_vec();
        let last = flipped.len() - 1;
        flipped[last] ^= 1;
        assert!(!bridge.verify(&mut ratchet, &SEED, &flipped, &commitments));
    }

    #[test]
    fn test_seed_does_not_change_outcome() {
        let bridge = bridge();
        let mut ratchet = EntropyRatchet::new();
        let blob = bridge.prove(&mut ratchet, &SEED, &[5, 10], &MASKS).unwrap();
        let commitments = [commit(5, &MASKS[0]), commit(10, &MASKS[1])];
        assert!(bridge.verify(&mut ratchet, &[42u8; 32], blob.as_bytes(), &commitments));
        assert!(bridge.verify_with_rng(&mut rand::rngs::OsRng, &mut ratchet, blob.as_bytes(), &commitments));
    }

    #[test]
    fn test_prove_with_rng_returns_seed() {
        let bridge = bridge();
        let mut ratchet = EntropyRatchet::new();
        let (seed, blob) = bridge
            .prove_with_rng(&mut rand::rngs::OsRng, &mut ratchet, &[3], &MASKS[..1])
            .unwrap();
        let again = bridge.prove(&mut ratchet, &seed, &[3], &MASKS[..1]).unwrap();
        assert_eq!(blob, again);
    }

    #[test]
    fn test_raw_framing() {
        let config = BridgeConfig {
            framing: Framing::Raw,
            ..BridgeConfig::default()
        };
        let raw = RangeProofBridge::new(&config).unwrap();
        let framed = bridge();
        let mut ratchet = EntropyRatchet::new();
        let blob = raw.prove(&mut ratchet, &SEED, &[5], &MASKS[..1]).unwrap();
        let commitments = [commit(5, &MASKS[0])];
        assert_eq!(blob.framing(), Framing::Raw);
        assert!(raw.verify(&mut ratchet, &SEED, blob.as_bytes(), &commitments));
        assert!(!framed.verify(&mut ratchet, &SEED, blob.as_bytes(), &commitments));
    }
}
