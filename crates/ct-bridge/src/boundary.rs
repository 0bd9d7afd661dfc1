//! Flat-buffer entry points for a host process
//!
//! Every call is self-contained: arguments are fixed-width byte buffers, proofs
//! travel as encoded blobs under the configured framing, and verification
//! answers only pass or fail.

use crate::{RangeProofBridge, RingSignatureBridge};
use ct_core::{
    hash_to_point_in_place, BridgeConfig, BridgeError, BridgeResult, EncodedBlob, SharedRatchet,
    SEED_LEN,
};
use tracing::debug;

const AMOUNT_LEN: usize = 8;
const POINT_LEN: usize = 32;

/// The bridge a host process holds for its lifetime
///
/// Owns the process-wide ratchet. Range proof calls lock it for their whole
/// reseed-and-draw sequence, with [`RangeProofBridge`] doing the reseed; ring
/// signature calls never touch it.
#[derive(Debug)]
pub struct CtBridge {
    ratchet: SharedRatchet,
    range: RangeProofBridge,
    ring: RingSignatureBridge,
}

impl CtBridge {
    pub fn new(config: &BridgeConfig) -> BridgeResult<Self> {
        Ok(Self {
            ratchet: SharedRatchet::new(),
            range: RangeProofBridge::new(config)?,
            ring: RingSignatureBridge::new(config),
        })
    }

    pub fn range(&self) -> &RangeProofBridge {
        &self.range
    }

    pub fn ring(&self) -> &RingSignatureBridge {
        &self.ring
    }

    /// Replace `point` with its image under the point map
    pub fn hash_to_point(&self, point: &mut [u8; 32]) {
        hash_to_point_in_place(point);
    }

    /// Prove `count` amounts in range
    ///
    /// `amounts` holds `count` little-endian `u64`s, `masks` holds `count`
    /// 32-byte scalars.
    pub fn generate_range_proof(
        &self,
        seed: &[u8; SEED_LEN],
        count: u8,
        amounts: &[u8],
        masks: &[u8],
    ) -> BridgeResult<EncodedBlob> {
        let amounts: Vec<u64> = split_exact::<AMOUNT_LEN>(amounts, count, "amounts")?
            .into_iter()
            .map(u64::from_le_bytes)
            .collect();
        let masks = split_exact::<POINT_LEN>(masks, count, "masks")?;

        let mut session = self.ratchet.lock();
        self.range.prove(&mut session, seed, &amounts, &masks)
    }

    /// Verify a range proof against `commitment_count` 32-byte commitments
    pub fn verify_range_proof(
        &self,
        seed: &[u8; SEED_LEN],
        blob: &[u8],
        commitment_count: u8,
        commitments: &[u8],
    ) -> bool {
        let commitments = match split_exact::<POINT_LEN>(commitments, commitment_count, "commitments")
        {
            Ok(commitments) => commitments,
            Err(err) => {
                debug!(%err, "range proof input rejected");
                return false;
            }
        };

        let mut session = self.ratchet.lock();
        self.range.verify(&mut session, seed, blob, &commitments)
    }

    /// Verify a ring signature
    ///
    /// `ring` holds `ring_count` members, each a destination key followed by
    /// its commitment.
    pub fn verify_ring_signature(
        &self,
        blob: &[u8],
        ring_count: u8,
        ring: &[u8],
        key_image: &[u8; 32],
        pseudo_output: &[u8; 32],
        message: &[u8; 32],
    ) -> bool {
        let members = match split_exact::<{ 2 * POINT_LEN }>(ring, ring_count, "ring") {
            Ok(members) => members,
            Err(err) => {
                debug!(%err, "ring signature input rejected");
                return false;
            }
        };
        let ring: Vec<[[u8; 32]; 2]> = members
            .iter()
            .map(|member| {
                let mut pair = [[0u8; 32]; 2];
                pair[0].copy_from_slice(&member[..POINT_LEN]);
                pair[1].copy_from_slice(&member[POINT_LEN..]);
                pair
            })
            .collect();

        self.ring
            .verify(blob, key_image, &ring, pseudo_output, message)
    }
}

/// Split `bytes` into exactly `count` chunks of `N` bytes
fn split_exact<const N: usize>(bytes: &[u8], count: u8, what: &str) -> BridgeResult<Vec<[u8; N]>> {
    let expected = usize::from(count) * N;
    if bytes.len() != expected {
        return Err(BridgeError::invalid_input(format!(
            "{} buffer holds {} bytes, {} expected for a count of {}",
            what,
            bytes.len(),
            expected,
            count
        )));
    }
    Ok(bytes
        .chunks_exact(N)
        .map(|chunk| {
            let mut out = [0u8; N];
            out.copy_from_slice(chunk);
            out
        })
        .collect())
}
