//! Benchmarks for batched range proof generation and verification

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ct_bridge::{BridgeConfig, EntropyRatchet, RangeProofBridge};
use ct_core::{Commitment, Scalar};

fn inputs(count: usize) -> (Vec<u64>, Vec<[u8; 32]>, Vec<[u8; 32]>) {
    let amounts: Vec<u64> = (0..count as u64).map(|i| i * 1_000 + 1).collect();
    let masks: Vec<Scalar> = (1..=count as u64).map(Scalar::from).collect();
    let commitments = amounts
        .iter()
        .zip(&masks)
        .map(|(&amount, &mask)| Commitment::new(mask, amount).calculate().compress().to_bytes())
        .collect();
    (amounts, masks.iter().map(Scalar::to_bytes).collect(), commitments)
}

fn bench_range_proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_proof_generation");
    group.sample_size(10);
    let bridge = RangeProofBridge::new(&BridgeConfig::default()).unwrap();

    for count in [1usize, 2, 3, 8, 16] {
        group.throughput(Throughput::Elements(count as u64));
        let (amounts, masks, _) = inputs(count);

        group.bench_with_input(BenchmarkId::new("prove", count), &count, |b, _| {
            let mut ratchet = EntropyRatchet::new();
            b.iter(|| {
                let blob = bridge
                    .prove(&mut ratchet, black_box(&[0u8; 32]), &amounts, &masks)
                    .unwrap();
                black_box(blob)
            });
        });
    }

    group.finish();
}

fn bench_range_proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_proof_verification");
    let bridge = RangeProofBridge::new(&BridgeConfig::default()).unwrap();

    for count in [1usize, 2, 3, 8, 16] {
        group.throughput(Throughput::Elements(count as u64));
        let (amounts, masks, commitments) = inputs(count);
        let mut ratchet = EntropyRatchet::new();
        let blob = bridge.prove(&mut ratchet, &[0u8; 32], &amounts, &masks).unwrap();

        group.bench_with_input(BenchmarkId::new("verify", count), &count, |b, _| {
            b.iter(|| {
                assert!(bridge.verify(&mut ratchet, &[0u8; 32], black_box(blob.as_bytes()), &commitments));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_range_proof_generation,
    bench_range_proof_verification
);
criterion_main!(benches);
