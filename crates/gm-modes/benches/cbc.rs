//! Benchmarks for CBC encryption and decryption throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use gm_core::sm4::Sm4Key;
use gm_modes::{decrypt, encrypt};

/// Plaintext size for the throughput benchmarks.
const INPUT_BYTES: usize = 1024 * 1024;

fn bench_cbc(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
    let mut key_bytes = [0u8; 16];
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut iv);
    let key = Sm4Key::from(key_bytes);

    let mut plaintext = vec![0u8; INPUT_BYTES];
    rng.fill_bytes(&mut plaintext);
    let ciphertext = encrypt(&plaintext, &key, &iv);

    let mut group = c.benchmark_group("cbc_1mib");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(INPUT_BYTES as u64));
    group.bench_function("encrypt", |b| {
        b.iter(|| encrypt(black_box(&plaintext), &key, &iv));
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| decrypt(black_box(&ciphertext), &key, &iv).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_cbc);
criterion_main!(benches);
