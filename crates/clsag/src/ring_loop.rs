//! The ring loop shared by signing and verification

use ct_core::{map_to_point, G};
use curve25519_dalek::{
    ristretto::RistrettoPoint,
    scalar::Scalar,
    traits::{MultiscalarMul, VartimeMultiscalarMul},
};
use sha2::{Digest, Sha512};
use subtle::{ConditionallySelectable, ConstantTimeEq};

const PREFIX: &[u8] = b"CLSAG_";
const AGG_0: &[u8] = b"agg_0";
const ROUND: &[u8] = b"round";
const PREFIX_AGG_0_LEN: usize = PREFIX.len() + AGG_0.len();

/// `Sha512(data) mod l`
pub(crate) fn hash_to_scalar(data: &[u8]) -> Scalar {
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&Sha512::digest(data));
    Scalar::from_bytes_mod_order_wide(&wide)
}

/// Key image generator for a one-time key
pub(crate) fn key_image_generator(key: &RistrettoPoint) -> RistrettoPoint {
    map_to_point(&key.compress().to_bytes())
}

pub(crate) enum Mode {
    /// Signer index and the nonce commitments `(a·G, a·Hp(P_signer))`
    Sign(usize, RistrettoPoint, RistrettoPoint),
    /// The claimed first challenge
    Verify(Scalar),
}

/// Walk the ring once, returning the aggregation-weighted final challenge
/// `(c·mu_P, c·mu_C)` and the challenge computed for index zero
pub(crate) fn core(
    ring: &[[RistrettoPoint; 2]],
    key_image: &RistrettoPoint,
    pseudo_out: &RistrettoPoint,
    msg: &[u8; 32],
    d: &RistrettoPoint,
    s: &[Scalar],
    mode: &Mode,
) -> ((Scalar, Scalar), Scalar) {
    let n = ring.len();

    // One buffer is built and then edited in place for each hash
    let mut to_hash = Vec::with_capacity(((2 * n) + 5) * 32);
    to_hash.extend_from_slice(PREFIX);
    to_hash.extend_from_slice(AGG_0);
    to_hash.extend_from_slice(&[0; 32 - PREFIX_AGG_0_LEN]);

    let mut keys = Vec::with_capacity(n);
    for member in ring {
        keys.push(member[0]);
        to_hash.extend_from_slice(member[0].compress().as_bytes());
    }

    let mut offsets = Vec::with_capacity(n);
    for member in ring {
        offsets.push(member[1] - pseudo_out);
        to_hash.extend_from_slice(member[1].compress().as_bytes());
    }

    to_hash.extend_from_slice(key_image.compress().as_bytes());
    to_hash.extend_from_slice(d.compress().as_bytes());
    to_hash.extend_from_slice(pseudo_out.compress().as_bytes());
    let mu_p = hash_to_scalar(&to_hash);
    to_hash[PREFIX_AGG_0_LEN - 1] = b'1';
    let mu_c = hash_to_scalar(&to_hash);

    // Round transcript: drop I, D and the pseudo-out, then re-add the pseudo-out before msg
    to_hash.truncate(((2 * n) + 1) * 32);
    to_hash[PREFIX.len()..PREFIX_AGG_0_LEN].copy_from_slice(ROUND);
    to_hash.extend_from_slice(pseudo_out.compress().as_bytes());
    to_hash.extend_from_slice(msg);

    let (start, end, mut c) = match mode {
        Mode::Sign(signer, a, ah) => {
            to_hash.extend_from_slice(a.compress().as_bytes());
            to_hash.extend_from_slice(ah.compress().as_bytes());
            (signer + 1, signer + n, hash_to_scalar(&to_hash))
        }
        Mode::Verify(c1) => (0, n, *c1),
    };

    let mut c1 = c;
    for i in (start..end).map(|i| i % n) {
        let c_p = mu_p * c;
        let c_c = mu_c * c;
        let hp = key_image_generator(&keys[i]);

        let (l, r) = match mode {
            Mode::Sign(..) => (
                RistrettoPoint::multiscalar_mul([s[i], c_p, c_c], [G(), keys[i], offsets[i]]),
                RistrettoPoint::multiscalar_mul([s[i], c_p, c_c], [hp, *key_image, *d]),
            ),
            Mode::Verify(..) => (
                RistrettoPoint::vartime_multiscalar_mul(
                    [s[i], c_p, c_c],
                    [G(), keys[i], offsets[i]],
                ),
                RistrettoPoint::vartime_multiscalar_mul([s[i], c_p, c_c], [hp, *key_image, *d]),
            ),
        };

        to_hash.truncate(((2 * n) + 3) * 32);
        to_hash.extend_from_slice(l.compress().as_bytes());
        to_hash.extend_from_slice(r.compress().as_bytes());
        c = hash_to_scalar(&to_hash);

        // Constant time so the signer's position does not show in timing
        c1.conditional_assign(&c, (i as u64).ct_eq(&((n - 1) as u64)));
    }

    ((c * mu_p, c * mu_c), c1)
}
