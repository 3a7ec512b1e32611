//! Benchmarks for the Blowfish II key schedule and single-block transforms.

use blowfish2::cipher::{BlockEncrypt, KeyInit};
use blowfish2::consts::{BLOCK_BYTES, MAX_KEY_BYTES};
use blowfish2::{Block, Blowfish2};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const BENCH_KEY: &[u8] = b"BenchmarkKey2024";

/// Key schedule cost for a short key and a full-length key.
///
/// Schedule work is fixed (1057 block encryptions), so both sizes should
/// land close together.
fn bench_key_schedule(c: &mut Criterion) {
    let long_key: Vec<u8> = (0..MAX_KEY_BYTES).map(|i| i as u8).collect();

    let mut group = c.benchmark_group("key_schedule");
    for key in [BENCH_KEY, long_key.as_slice()] {
        group.bench_with_input(BenchmarkId::from_parameter(key.len()), key, |b, key| {
            b.iter(|| Blowfish2::with_key(black_box(key)).unwrap());
        });
    }
    group.finish();
}

fn bench_encrypt(c: &mut Criterion) {
    let cipher = Blowfish2::with_key(BENCH_KEY).unwrap();

    let mut group = c.benchmark_group("encrypt_block");
    group.throughput(Throughput::Bytes(BLOCK_BYTES as u64));
    group.bench_function("words", |b| {
        let (mut l, mut r) = (0x0123456789ABCDEF, 0xFEDCBA9876543210);
        b.iter(|| {
            (l, r) = cipher.encrypt(black_box(l), black_box(r));
        });
    });
    group.bench_function("bytes", |b| {
        let mut block = Block::default();
        b.iter(|| cipher.encrypt_block(black_box(&mut block)));
    });
    group.finish();
}

fn bench_decrypt(c: &mut Criterion) {
    let cipher = Blowfish2::new_from_slice(BENCH_KEY).unwrap();

    let mut group = c.benchmark_group("decrypt_block");
    group.throughput(Throughput::Bytes(BLOCK_BYTES as u64));
    group.bench_function("words", |b| {
        let mut block = [0x0123456789ABCDEF, 0xFEDCBA9876543210];
        b.iter(|| cipher.decrypt_words(black_box(&mut block)));
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_encrypt, bench_decrypt);
criterion_main!(benches);
