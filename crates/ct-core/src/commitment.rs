//! Pedersen commitment openings and ring members

use crate::point::{G, H};
use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::VartimeMultiscalarMul,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The opening of a Pedersen commitment
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Commitment {
    pub mask: Scalar,
    pub amount: u64,
}

impl std::fmt::Debug for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Commitment")
            .field("amount", &self.amount)
            .finish_non_exhaustive()
    }
}

impl Commitment {
    /// A commitment to zero with a mask of one, so it is never the identity
    pub fn zero() -> Self {
        Self::new(Scalar::ONE, 0)
    }

    pub fn new(mask: Scalar, amount: u64) -> Self {
        Self { mask, amount }
    }

    /// `amount·H + mask·G`
    pub fn calculate(&self) -> RistrettoPoint {
        RistrettoPoint::vartime_multiscalar_mul([Scalar::from(self.amount), self.mask], [H(), G()])
    }
}

/// A spendable output in a ring: its one-time key and its amount commitment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DestinationMaskPair {
    pub dest: RistrettoPoint,
    pub mask: RistrettoPoint,
}

impl DestinationMaskPair {
    pub fn new(dest: RistrettoPoint, mask: RistrettoPoint) -> Self {
        Self { dest, mask }
    }

    /// Decode a pair from its two compressed points
    pub fn from_bytes(dest: &[u8; 32], mask: &[u8; 32]) -> Option<Self> {
        Some(Self {
            dest: point_from_bytes(dest)?,
            mask: point_from_bytes(mask)?,
        })
    }

    pub fn to_bytes(&self) -> [[u8; 32]; 2] {
        [
            self.dest.compress().to_bytes(),
            self.mask.compress().to_bytes(),
        ]
    }
}

impl From<DestinationMaskPair> for [RistrettoPoint; 2] {
    fn from(pair: DestinationMaskPair) -> Self {
        [pair.dest, pair.mask]
    }
}

/// Decompress a 32-byte Ristretto encoding
pub fn point_from_bytes(bytes: &[u8; 32]) -> Option<RistrettoPoint> {
    CompressedRistretto(*bytes).decompress()
}

/// Parse a canonically encoded scalar
pub fn scalar_from_bytes(bytes: &[u8; 32]) -> Option<Scalar> {
    Option::from(Scalar::from_canonical_bytes(*bytes))
}
