//! Range proof prover implementation

use crate::{AggregatedRangeProof, RangeError, RangeParameters, RangeResult, RANGE_TRANSCRIPT_LABEL};
use ct_core::{Commitment, CompressedRistretto, Scalar};
use merlin::Transcript;
use rand_core::{CryptoRng, RngCore};

/// Prover for batched range proofs
#[derive(Debug)]
pub struct RangeProver<'a> {
    params: &'a RangeParameters,
}

impl<'a> RangeProver<'a> {
    pub fn new(params: &'a RangeParameters) -> Self {
        Self { params }
    }

    /// Prove every opening's amount lies in `[0, 2^bits)`
    ///
    /// All proof randomness, padding masks included, is drawn from `rng`, so a
    /// deterministic RNG yields a deterministic proof. Returns the proof and the
    /// caller's commitments in input order; padding commitments stay inside the
    /// proof.
    pub fn prove<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        openings: &[Commitment],
    ) -> RangeResult<(AggregatedRangeProof, Vec<CompressedRistretto>)> {
        let count = openings.len();
        if count == 0 {
            return Err(RangeError::InvalidParameters("empty batch".to_string()));
        }
        if count > self.params.max_batch() {
            return Err(RangeError::InvalidParameters(format!(
                "batch of {} exceeds the limit of {}",
                count,
                self.params.max_batch()
            )));
        }

        let bits = self.params.bits();
        if bits < 64 {
            let bound = 1u64 << bits;
            if let Some(opening) = openings.iter().find(|o| o.amount >= bound) {
                return Err(RangeError::InvalidParameters(format!(
                    "amount {} does not fit in {} bits",
                    opening.amount, bits
                )));
            }
        }

        let padded = RangeParameters::padded_len(count);
        let mut values = Vec::with_capacity(padded);
        let mut blindings = Vec::with_capacity(padded);
        for opening in openings {
            values.push(opening.amount);
            blindings.push(opening.mask);
        }
        for _ in count..padded {
            values.push(0);
            blindings.push(Scalar::random(rng));
        }

        let mut transcript = Transcript::new(RANGE_TRANSCRIPT_LABEL);
        let (proof, mut commitments) = bulletproofs::RangeProof::prove_multiple_with_rng(
            self.params.bp_gens(),
            self.params.pc_gens(),
            &mut transcript,
            &values,
            &blindings,
            bits,
            rng,
        )?;

        let padding = commitments.split_off(count);
        Ok((
            AggregatedRangeProof {
                bits: bits as u8,
                count: count as u8,
                padding,
                proof,
            },
            commitments,
        ))
    }
}
