//! CLSAG signature structure and wire body

use ct_core::{
    point_from_bytes, scalar_from_bytes, BridgeError, BridgeResult, Reader, WireFormat,
};
use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};

/// Type tag for ring signatures on the wire
pub const CLSAG_TAG: u8 = 0x43;

/// A CLSAG signature
///
/// The key image, ring, pseudo-out and message are not part of the signature;
/// the verifier supplies them.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clsag {
    pub(crate) d: RistrettoPoint,
    pub(crate) s: Vec<Scalar>,
    pub(crate) c1: Scalar,
}

impl Clsag {
    /// Commitment to the mask difference, scaled by the signer's key image generator
    pub fn d(&self) -> &RistrettoPoint {
        &self.d
    }

    /// One response per ring member
    pub fn s(&self) -> &[Scalar] {
        &self.s
    }

    /// Challenge for ring index zero
    pub fn c1(&self) -> &Scalar {
        &self.c1
    }

    /// Number of ring members this signature was made over
    pub fn ring_len(&self) -> usize {
        self.s.len()
    }

    /// Size of the encoded body for a ring of `ring_len` members, version and tag included
    pub fn fee_weight(ring_len: usize) -> usize {
        2 + 1 + (ring_len * 32) + 32 + 32
    }
}

impl WireFormat for Clsag {
    const TAG: u8 = CLSAG_TAG;

    fn write_body(&self, out: &mut Vec<u8>) {
        // Rings over 255 members are refused at signing time
        out.push(self.s.len() as u8);
        for s in &self.s {
            out.extend_from_slice(s.as_bytes());
        }
        out.extend_from_slice(self.c1.as_bytes());
        out.extend_from_slice(self.d.compress().as_bytes());
    }

    fn read_body(reader: &mut Reader<'_>) -> BridgeResult<Self> {
        let ring_len = reader.read_u8()?;
        if ring_len == 0 {
            return Err(BridgeError::decode("empty ring"));
        }

        let mut s = Vec::with_capacity(usize::from(ring_len));
        for _ in 0..ring_len {
            s.push(read_scalar(reader, "s")?);
        }
        let c1 = read_scalar(reader, "c1")?;
        let d = point_from_bytes(&reader.read_array()?)
            .ok_or_else(|| BridgeError::decode("invalid D"))?;

        Ok(Self { d, s, c1 })
    }
}

fn read_scalar(reader: &mut Reader<'_>, what: &str) -> BridgeResult<Scalar> {
    scalar_from_bytes(&reader.read_array()?)
        .ok_or_else(|| BridgeError::decode(format!("non-canonical {}", what)))
}
