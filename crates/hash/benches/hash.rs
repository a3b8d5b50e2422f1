// Copyright 2024-2025 Irreducible Inc.

use cnhash_hash::{
	blake256, groestl256, jh256, keccak1600, keccak256, parallel::digest_many, HashAlgorithm,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{thread_rng, RngCore};

fn bench_hashes(c: &mut Criterion) {
	let mut group = c.benchmark_group("256-bit hashes");

	let mut rng = thread_rng();

	// A proof-of-work final-hash input is the 200-byte Keccak state; also measure bulk data.
	for n in [200usize, 1 << 14] {
		let mut data = vec![0u8; n];
		rng.fill_bytes(&mut data);
		group.throughput(Throughput::Bytes(n as u64));

		group.bench_with_input(BenchmarkId::new("BLAKE-256", n), &data, |b, data| {
			b.iter(|| blake256(data))
		});
		group.bench_with_input(BenchmarkId::new("Groestl-256", n), &data, |b, data| {
			b.iter(|| groestl256(data))
		});
		group.bench_with_input(BenchmarkId::new("Groestl-256-RustCrypto", n), &data, |b, data| {
			b.iter(|| <groestl_crypto::Groestl256 as groestl_crypto::Digest>::digest(data))
		});
		group.bench_with_input(BenchmarkId::new("JH-256", n), &data, |b, data| {
			b.iter(|| jh256(data))
		});
		group.bench_with_input(BenchmarkId::new("Keccak-256", n), &data, |b, data| {
			b.iter(|| keccak256(data))
		});
	}

	group.finish()
}

fn bench_keccak_state(c: &mut Criterion) {
	let mut group = c.benchmark_group("Keccak sponge");

	let mut data = [0u8; 76];
	thread_rng().fill_bytes(&mut data);
	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("keccak1600", |b| b.iter(|| keccak1600(&data)));

	group.finish()
}

fn bench_batch(c: &mut Criterion) {
	let _ = cnhash_utils::rayon::adjust_thread_pool();

	let mut group = c.benchmark_group("Batch");

	const COUNT: usize = 256;
	const N: usize = 200;
	let mut rng = thread_rng();
	let inputs: Vec<Vec<u8>> = (0..COUNT)
		.map(|_| {
			let mut data = vec![0u8; N];
			rng.fill_bytes(&mut data);
			data
		})
		.collect();

	group.throughput(Throughput::Bytes((COUNT * N) as u64));
	for alg in HashAlgorithm::ALL {
		group.bench_function(BenchmarkId::new("digest_many", alg), |b| {
			b.iter(|| alg.digest_many(&inputs))
		});
	}
	group.bench_function("Groestl256 generic", |b| {
		b.iter(|| digest_many::<cnhash_hash::Groestl256, _>(&inputs))
	});

	group.finish()
}

criterion_group!(hash, bench_hashes, bench_keccak_state, bench_batch);
criterion_main!(hash);
