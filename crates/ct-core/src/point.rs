//! Point mapping and the generators derived from it

use bulletproofs::PedersenGens;
use curve25519_dalek::{constants::RISTRETTO_BASEPOINT_POINT, ristretto::RistrettoPoint};
use sha2::{Digest, Sha512};
use std::sync::OnceLock;

/// Domain separation label for the point map
pub const HASH_TO_POINT_DOMAIN: &[u8] = b"ct-bridge/hash-to-point";

/// Map a 32-byte digest onto a Ristretto point
///
/// Total over all inputs: the wide hash is fed through the Elligator map, which
/// never fails.
pub fn map_to_point(input: &[u8; 32]) -> RistrettoPoint {
    let mut hasher = Sha512::new();
    hasher.update(HASH_TO_POINT_DOMAIN);
    hasher.update(input);
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&hasher.finalize());
    RistrettoPoint::from_uniform_bytes(&wide)
}

/// Map a 32-byte digest onto a point, returned in compressed form
pub fn hash_to_point(input: &[u8; 32]) -> [u8; 32] {
    map_to_point(input).compress().to_bytes()
}

/// In-place form of [`hash_to_point`]
pub fn hash_to_point_in_place(point: &mut [u8; 32]) {
    *point = hash_to_point(point);
}

/// Generator for masks and spend keys
#[allow(non_snake_case)]
pub fn G() -> RistrettoPoint {
    RISTRETTO_BASEPOINT_POINT
}

static H_CELL: OnceLock<RistrettoPoint> = OnceLock::new();

/// Generator for amounts, with no known discrete log relative to [`G`]
#[allow(non_snake_case)]
pub fn H() -> RistrettoPoint {
    *H_CELL.get_or_init(|| map_to_point(&G().compress().to_bytes()))
}

/// Pedersen generators shared by range proofs and ring signatures
///
/// Amounts sit on `H` and masks on `G`, so `C = amount·H + mask·G`.
pub fn pedersen_gens() -> PedersenGens {
    PedersenGens {
        B: H(),
        B_blinding: G(),
    }
}
