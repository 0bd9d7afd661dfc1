//! Benchmarks for deterministic byte generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ct_core::EntropyRatchet;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratchet_generate");

    for len in [32usize, 256, 4096] {
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut ratchet = EntropyRatchet::new();
            let mut buf = vec![0u8; len];
            b.iter(|| {
                ratchet.reseed(black_box(&[7u8; 32]));
                ratchet.fill(&mut buf);
                black_box(&buf);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
