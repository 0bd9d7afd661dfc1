//! Ring Signature Bridge

use crate::outcome::{fault_boundary, Verification};
use clsag::{Clsag, ClsagContext};
use ct_core::{
    decode, encode, point_from_bytes, BridgeConfig, BridgeError, BridgeResult,
    DestinationMaskPair, EncodedBlob, Framing, RistrettoPoint, Scalar, MAX_BATCH_LIMIT,
};
use rand_core::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::Zeroizing;

/// Encodes and verifies CLSAG ring signatures
///
/// Verification draws no randomness and holds no state, so one bridge may be
/// shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct RingSignatureBridge {
    framing: Framing,
}

impl RingSignatureBridge {
    pub fn new(config: &BridgeConfig) -> Self {
        Self {
            framing: config.framing,
        }
    }

    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// Sign every input and encode each signature
    ///
    /// Returns one `(blob, pseudo_out)` per input, in input order.
    pub fn sign<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        inputs: Vec<(Zeroizing<Scalar>, ClsagContext)>,
        sum_outputs: Scalar,
        message: &[u8; 32],
    ) -> BridgeResult<Vec<(EncodedBlob, [u8; 32])>> {
        let signed = Clsag::sign(rng, inputs, sum_outputs, *message)?;
        signed
            .iter()
            .map(|(clsag, pseudo_out)| {
                let blob = encode(clsag, self.framing)?;
                trace!(ring_len = clsag.ring_len(), bytes = blob.len(), "ring signature encoded");
                Ok((blob, pseudo_out.compress().to_bytes()))
            })
            .collect()
    }

    /// Verify `blob` over `message` for `ring`, binding `key_image` and `pseudo_output`
    pub fn check(
        &self,
        blob: &[u8],
        key_image: &[u8; 32],
        ring: &[[[u8; 32]; 2]],
        pseudo_output: &[u8; 32],
        message: &[u8; 32],
    ) -> Verification {
        let outcome =
            Verification::from(self.verify_inner(blob, key_image, ring, pseudo_output, message));
        if let Verification::Malformed(err) = &outcome {
            debug!(%err, "ring signature input rejected");
        }
        outcome
    }

    /// [`Self::check`] collapsed to pass/fail
    pub fn verify(
        &self,
        blob: &[u8],
        key_image: &[u8; 32],
        ring: &[[[u8; 32]; 2]],
        pseudo_output: &[u8; 32],
        message: &[u8; 32],
    ) -> bool {
        self.check(blob, key_image, ring, pseudo_output, message)
            .into()
    }

    fn verify_inner(
        &self,
        blob: &[u8],
        key_image: &[u8; 32],
        ring: &[[[u8; 32]; 2]],
        pseudo_output: &[u8; 32],
        message: &[u8; 32],
    ) -> BridgeResult<()> {
        if ring.is_empty() {
            return Err(BridgeError::invalid_input("empty ring"));
        }
        if ring.len() > MAX_BATCH_LIMIT {
            return Err(BridgeError::invalid_input(format!(
                "ring of {} members exceeds {}",
                ring.len(),
                MAX_BATCH_LIMIT
            )));
        }

        let clsag: Clsag = decode(blob, self.framing)?;
        if clsag.ring_len() != ring.len() {
            return Err(BridgeError::invalid_input(format!(
                "signature covers {} members, ring has {}",
                clsag.ring_len(),
                ring.len()
            )));
        }

        let members = ring
            .iter()
            .map(|[dest, mask]| {
                DestinationMaskPair::from_bytes(dest, mask)
                    .map(<[RistrettoPoint; 2]>::from)
                    .ok_or_else(|| BridgeError::invalid_input("invalid ring member"))
            })
            .collect::<BridgeResult<Vec<_>>>()?;
        let key_image = point_from_bytes(key_image)
            .ok_or_else(|| BridgeError::invalid_input("invalid key image"))?;
        let pseudo_output = point_from_bytes(pseudo_output)
            .ok_or_else(|| BridgeError::invalid_input("invalid pseudo-output"))?;

        fault_boundary("ring verify", || {
            Ok(clsag.verify(&members, &key_image, &pseudo_output, message)?)
        })
    }
}
