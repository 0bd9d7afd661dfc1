//! Range proof verifier implementation

use crate::{AggregatedRangeProof, RangeError, RangeParameters, RangeResult, RANGE_TRANSCRIPT_LABEL};
use ct_core::CompressedRistretto;
use merlin::Transcript;
use rand_core::{CryptoRng, RngCore};

/// Verifier for batched range proofs
#[derive(Debug)]
pub struct RangeVerifier<'a> {
    params: &'a RangeParameters,
}

impl<'a> RangeVerifier<'a> {
    pub fn new(params: &'a RangeParameters) -> Self {
        Self { params }
    }

    /// Verify `proof` against the caller's commitments, in the order they were proven
    ///
    /// `rng` only randomizes the batched multiscalar check; the outcome does not
    /// depend on it.
    pub fn verify<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        proof: &AggregatedRangeProof,
        commitments: &[CompressedRistretto],
    ) -> RangeResult<()> {
        if proof.bits() != self.params.bits() {
            return Err(RangeError::InvalidParameters(format!(
                "proof covers {} bits, expected {}",
                proof.bits(),
                self.params.bits()
            )));
        }
        if commitments.len() != proof.count() {
            return Err(RangeError::CommitmentCountMismatch {
                expected: proof.count(),
                actual: commitments.len(),
            });
        }
        if proof.batch_len() > self.params.party_capacity() {
            return Err(RangeError::InvalidParameters(format!(
                "batch of {} exceeds capacity {}",
                proof.batch_len(),
                self.params.party_capacity()
            )));
        }

        let mut batch = Vec::with_capacity(proof.batch_len());
        batch.extend_from_slice(commitments);
        batch.extend_from_slice(proof.padding());

        let mut transcript = Transcript::new(RANGE_TRANSCRIPT_LABEL);
        proof.inner().verify_multiple_with_rng(
            self.params.bp_gens(),
            self.params.pc_gens(),
            &mut transcript,
            &batch,
            self.params.bits(),
            rng,
        )?;
        Ok(())
    }
}
