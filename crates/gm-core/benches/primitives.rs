//! Benchmarks for the SM3 and SM4 primitives.
//!
//! Measures SM3 digest throughput over a large buffer plus SM4 key
//! scheduling and single-block transform latency.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use gm_core::sm3;
use gm_core::sm4::{encrypt_block, expand_key, Sm4Key};

/// Message size for the SM3 throughput benchmark.
const HASH_INPUT_BYTES: usize = 4 * 1024 * 1024;

fn bench_sm3(c: &mut Criterion) {
    let message = vec![0x61u8; HASH_INPUT_BYTES];

    let mut group = c.benchmark_group("sm3");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(HASH_INPUT_BYTES as u64));
    group.bench_function("digest_4mib", |b| {
        b.iter(|| sm3::digest(black_box(&message)));
    });
    group.finish();
}

fn bench_sm4(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
    let mut key_bytes = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut block);
    let key = Sm4Key::from(key_bytes);
    let round_keys = expand_key(&key);

    let mut group = c.benchmark_group("sm4");
    group.bench_function("expand_key", |b| {
        b.iter(|| expand_key(black_box(&key)));
    });
    group.throughput(Throughput::Bytes(16));
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(black_box(&block), &round_keys));
    });
    group.finish();
}

criterion_group!(benches, bench_sm3, bench_sm4);
criterion_main!(benches);
