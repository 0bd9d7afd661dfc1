//! Property-based tests for range proof soundness and completeness

use crate::{AggregatedRangeProof, RangeParameters, RangeProver, RangeVerifier};
use ct_core::{decode, encode, BridgeConfig, Commitment, EntropyRatchet, Framing, Scalar};
use proptest::prelude::*;

fn params() -> RangeParameters {
    RangeParameters::new(&BridgeConfig {
        max_batch: 8,
        range_bits: 32,
        ..BridgeConfig::default()
    })
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    /// In-range batches of any size verify after an encode/decode trip
    #[test]
    fn test_completeness(
        amounts in prop::collection::vec(0u64..(1u64 << 32), 1..=8),
        seed in any::<[u8; 32]>(),
    ) {
        let params = params();
        let openings: Vec<Commitment> = amounts
            .iter()
            .zip(1u64..)
            .map(|(&amount, mask)| Commitment::new(Scalar::from(mask), amount))
            .collect();

        let mut rng = EntropyRatchet::from_seed(&seed);
        let (proof, commitments) = RangeProver::new(&params).prove(&mut rng, &openings).unwrap();
        prop_assert!(proof.batch_len().is_power_of_two());

        let blob = encode(&proof, Framing::LengthPrefixed).unwrap();
        let decoded: AggregatedRangeProof = decode(blob.as_bytes(), Framing::LengthPrefixed).unwrap();
        prop_assert!(RangeVerifier::new(&params).verify(&mut rng, &decoded, &commitments).is_ok());
    }

    /// A commitment to any other amount under the same mask fails
    #[test]
    fn test_binding(amount in 0u64..1000, delta in 1u64..1000) {
        let params = params();
        let opening = Commitment::new(Scalar::from(77u64), amount);
        let mut rng = EntropyRatchet::from_seed(&[3u8; 32]);
        let (proof, _) = RangeProver::new(&params).prove(&mut rng, &[opening]).unwrap();

        let forged = Commitment::new(Scalar::from(77u64), amount + delta).calculate().compress();
        prop_assert!(RangeVerifier::new(&params).verify(&mut rng, &proof, &[forged]).is_err());
    }
}
