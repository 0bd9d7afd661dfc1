//! CLSAG signing

use crate::ring_loop::{core, key_image_generator, Mode};
use crate::{Clsag, ClsagError};
use ct_core::Commitment;
use curve25519_dalek::{
    constants::RISTRETTO_BASEPOINT_TABLE, ristretto::RistrettoPoint, scalar::Scalar,
};
use rand_core::{CryptoRng, RngCore};
use std::ops::Deref;
use zeroize::{Zeroize, Zeroizing};

/// Everything needed to sign for one input besides the secret key
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ClsagContext {
    commitment: Commitment,
    ring: Vec<[RistrettoPoint; 2]>,
    signer_index: u8,
}

impl ClsagContext {
    /// Create a context, checking the opening matches the signer's ring member
    pub fn new(
        ring: Vec<[RistrettoPoint; 2]>,
        signer_index: u8,
        commitment: Commitment,
    ) -> Result<Self, ClsagError> {
        if ring.is_empty() || ring.len() > usize::from(u8::MAX) {
            return Err(ClsagError::InvalidRing);
        }
        if usize::from(signer_index) >= ring.len() {
            return Err(ClsagError::InvalidRing);
        }
        if ring[usize::from(signer_index)][1] != commitment.calculate() {
            return Err(ClsagError::InvalidCommitment);
        }
        Ok(Self {
            commitment,
            ring,
            signer_index,
        })
    }

    pub fn ring(&self) -> &[[RistrettoPoint; 2]] {
        &self.ring
    }

    pub fn signer_index(&self) -> usize {
        usize::from(self.signer_index)
    }

    fn signer_key(&self) -> RistrettoPoint {
        self.ring[self.signer_index()][0]
    }
}

/// `x·Hp(x·G)`
pub fn generate_key_image(secret: &Zeroizing<Scalar>) -> RistrettoPoint {
    let key = RISTRETTO_BASEPOINT_TABLE * secret.deref();
    key_image_generator(&key) * secret.deref()
}

struct SignCore {
    incomplete: Clsag,
    pseudo_out: RistrettoPoint,
    key_challenge: Scalar,
    challenged_mask: Scalar,
}

fn sign_core<R: RngCore + CryptoRng>(
    rng: &mut R,
    key_image: &RistrettoPoint,
    input: &ClsagContext,
    mask: Scalar,
    msg: &[u8; 32],
    a: RistrettoPoint,
    ah: RistrettoPoint,
) -> SignCore {
    let r = input.signer_index();

    let pseudo_out = Commitment::new(mask, input.commitment.amount).calculate();
    let mask_delta = input.commitment.mask - mask;

    let d = key_image_generator(&input.signer_key()) * mask_delta;
    let s: Vec<Scalar> = (0..input.ring.len()).map(|_| Scalar::random(rng)).collect();
    let ((key_challenge, mask_challenge), c1) = core(
        &input.ring,
        key_image,
        &pseudo_out,
        msg,
        &d,
        &s,
        &Mode::Sign(r, a, ah),
    );

    SignCore {
        incomplete: Clsag { d, s, c1 },
        pseudo_out,
        key_challenge,
        challenged_mask: mask_challenge * mask_delta,
    }
}

impl Clsag {
    /// Sign every input of a transaction
    ///
    /// Pseudo-outs must sum to the output commitments, masks included, for the
    /// transaction to balance. All but the last input get a random pseudo-out
    /// mask; the last one takes `sum_outputs` minus the others.
    ///
    /// Returns each signature with its pseudo-out commitment.
    pub fn sign<R: RngCore + CryptoRng>(
        rng: &mut R,
        mut inputs: Vec<(Zeroizing<Scalar>, ClsagContext)>,
        sum_outputs: Scalar,
        msg: [u8; 32],
    ) -> Result<Vec<(Clsag, RistrettoPoint)>, ClsagError> {
        let mut generators = Vec::with_capacity(inputs.len());
        let mut key_images = Vec::with_capacity(inputs.len());
        for (secret, context) in &inputs {
            let key = context.signer_key();
            if RISTRETTO_BASEPOINT_TABLE * secret.deref() != key {
                return Err(ClsagError::InvalidKey);
            }
            let generator = key_image_generator(&key);
            key_images.push(generator * secret.deref());
            generators.push(generator);
        }

        let mut res = Vec::with_capacity(inputs.len());
        let mut sum_pseudo_outs = Scalar::ZERO;
        let last = inputs.len().saturating_sub(1);
        for i in 0..inputs.len() {
            let mask = if i == last {
                sum_outputs - sum_pseudo_outs
            } else {
                let mask = Scalar::random(rng);
                sum_pseudo_outs += mask;
                mask
            };

            let mut nonce = Zeroizing::new(Scalar::random(rng));
            let SignCore {
                mut incomplete,
                pseudo_out,
                key_challenge,
                challenged_mask,
            } = sign_core(
                rng,
                &key_images[i],
                &inputs[i].1,
                mask,
                &msg,
                RISTRETTO_BASEPOINT_TABLE * nonce.deref(),
                generators[i] * nonce.deref(),
            );
            // nonce - (c_p·x + c_c·z), where z is the mask delta against the pseudo-out
            let signer = inputs[i].1.signer_index();
            incomplete.s[signer] =
                nonce.deref() - ((key_challenge * inputs[i].0.deref()) + challenged_mask);

            inputs[i].0.zeroize();
            nonce.zeroize();

            debug_assert!(incomplete
                .verify(inputs[i].1.ring(), &key_images[i], &pseudo_out, &msg)
                .is_ok());

            res.push((incomplete, pseudo_out));
        }

        Ok(res)
    }
}
