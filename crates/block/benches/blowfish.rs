// Dependencies linked into this bench but not exercised by it.
use thiserror as _;
use pretty_assertions as _;
use proptest as _;
use rstest as _;

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use keystone_block::{BlockDecrypt, BlockEncrypt, Blowfish};

fn bench_blowfish(c: &mut Criterion) {
	let mut group = c.benchmark_group("blowfish");
	group.throughput(Throughput::Bytes(8));

	group.bench_function("key_schedule", |b| b.iter(|| Blowfish::new(black_box(b"keystone key"))));

	let cipher = Blowfish::new(b"keystone key").unwrap();
	let mut out = [0u8; 8];
	group.bench_function("encrypt_block", |b| b.iter(|| cipher.encrypt_block(black_box(&[7; 8]), &mut out)));
	group.bench_function("decrypt_block", |b| b.iter(|| cipher.decrypt_block(black_box(&[7; 8]), &mut out)));

	group.finish();
}

criterion_group!(benches, bench_blowfish);
criterion_main!(benches);
