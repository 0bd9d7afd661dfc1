//! Range proof envelope and wire body

use ct_core::{BridgeError, BridgeResult, CompressedRistretto, Reader, WireFormat, SUPPORTED_RANGE_BITS};

/// Type tag for range proofs on the wire
pub const RANGE_PROOF_TAG: u8 = 0x52;

/// An aggregated range proof together with the padding that completes its batch
///
/// Wire body after the version and tag:
/// ```text
/// bits u8 | count u8 | padding u8 | padding × 32 | proof_len u16 BE | proof
/// ```
#[derive(Clone, Debug)]
pub struct AggregatedRangeProof {
    pub(crate) bits: u8,
    pub(crate) count: u8,
    pub(crate) padding: Vec<CompressedRistretto>,
    pub(crate) proof: bulletproofs::RangeProof,
}

impl AggregatedRangeProof {
    /// Width of the proven range
    pub fn bits(&self) -> usize {
        usize::from(self.bits)
    }

    /// Number of caller commitments covered
    pub fn count(&self) -> usize {
        usize::from(self.count)
    }

    /// Zero-amount commitments appended to reach a power-of-two batch
    pub fn padding(&self) -> &[CompressedRistretto] {
        &self.padding
    }

    /// Size of the aggregated batch
    pub fn batch_len(&self) -> usize {
        self.count() + self.padding.len()
    }

    pub fn inner(&self) -> &bulletproofs::RangeProof {
        &self.proof
    }
}

impl PartialEq for AggregatedRangeProof {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
            && self.count == other.count
            && self.padding == other.padding
            && self.proof.to_bytes() == other.proof.to_bytes()
    }
}

impl Eq for AggregatedRangeProof {}

impl WireFormat for AggregatedRangeProof {
    const TAG: u8 = RANGE_PROOF_TAG;

    fn write_body(&self, out: &mut Vec<u8>) {
        let proof = self.proof.to_bytes();
        out.push(self.bits);
        out.push(self.count);
        // Batches are capped at 256, so padding fits a byte
        out.push(self.padding.len() as u8);
        for commitment in &self.padding {
            out.extend_from_slice(commitment.as_bytes());
        }
        // An aggregated proof for 256 × 64 bits is well under 64 KiB
        out.extend_from_slice(&(proof.len() as u16).to_be_bytes());
        out.extend_from_slice(&proof);
    }

    fn read_body(reader: &mut Reader<'_>) -> BridgeResult<Self> {
        let bits = reader.read_u8()?;
        if !SUPPORTED_RANGE_BITS.contains(&usize::from(bits)) {
            return Err(BridgeError::decode(format!("unsupported bit width {}", bits)));
        }

        let count = reader.read_u8()?;
        if count == 0 {
            return Err(BridgeError::decode("empty batch"));
        }

        let padding_len = reader.read_u8()?;
        let batch = usize::from(count) + usize::from(padding_len);
        if !batch.is_power_of_two() {
            return Err(BridgeError::decode(format!(
                "batch of {} + {} padding is not a power of two",
                count, padding_len
            )));
        }

        let mut padding = Vec::with_capacity(usize::from(padding_len));
        for _ in 0..padding_len {
            let commitment = CompressedRistretto(reader.read_array()?);
            if commitment.decompress().is_none() {
                return Err(BridgeError::decode("invalid padding commitment"));
            }
            padding.push(commitment);
        }

        let proof_len = reader.read_u16_be()?;
        let proof = bulletproofs::RangeProof::from_bytes(reader.read_bytes(usize::from(proof_len))?)
            .map_err(|e| BridgeError::decode(format!("invalid range proof: {:?}", e)))?;

        Ok(Self {
            bits,
            count,
            padding,
            proof,
        })
    }
}
