//! Benchmarks for CLSAG signing and verification

use clsag::{generate_key_image, Clsag, ClsagContext};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ct_core::{Commitment, RistrettoPoint, Scalar, G};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

struct Setup {
    secret: Zeroizing<Scalar>,
    context: ClsagContext,
}

fn setup(ring_len: usize) -> Setup {
    let mut rng = OsRng;
    let secret = Zeroizing::new(Scalar::random(&mut rng));
    let opening = Commitment::new(Scalar::random(&mut rng), 1_000);
    let signer = ring_len / 2;
    let ring = (0..ring_len)
        .map(|i| {
            if i == signer {
                [G() * *secret, opening.calculate()]
            } else {
                [RistrettoPoint::random(&mut rng), RistrettoPoint::random(&mut rng)]
            }
        })
        .collect();
    let context = ClsagContext::new(ring, signer as u8, opening).unwrap();
    Setup { secret, context }
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("clsag_sign");

    for ring_len in [2usize, 11, 16, 64] {
        group.throughput(Throughput::Elements(ring_len as u64));
        let Setup { secret, context } = setup(ring_len);

        group.bench_with_input(BenchmarkId::new("sign", ring_len), &ring_len, |b, _| {
            b.iter(|| {
                let signed = Clsag::sign(
                    &mut OsRng,
                    vec![(secret.clone(), context.clone())],
                    Scalar::ZERO,
                    black_box([0u8; 32]),
                )
                .unwrap();
                black_box(signed)
            });
        });
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("clsag_verify");

    for ring_len in [2usize, 11, 16, 64] {
        group.throughput(Throughput::Elements(ring_len as u64));
        let Setup { secret, context } = setup(ring_len);
        let key_image = generate_key_image(&secret);
        let ring = context.ring().to_vec();
        let (clsag, pseudo_out) = Clsag::sign(&mut OsRng, vec![(secret, context)], Scalar::ZERO, [0u8; 32])
            .unwrap()
            .swap_remove(0);

        group.bench_with_input(BenchmarkId::new("verify", ring_len), &ring_len, |b, _| {
            b.iter(|| {
                clsag
                    .verify(black_box(&ring), &key_image, &pseudo_out, &[0u8; 32])
                    .unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
