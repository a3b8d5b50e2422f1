// Copyright 2025 Irreducible Inc.

use digest::{Digest, Output};
use rayon::prelude::*;

/// Hashes every input independently on the rayon pool, each with a fresh clone of `hasher`.
///
/// `hasher` may already hold a common prefix. Results are returned in input order.
pub fn digest_many_with<D, I>(hasher: &D, inputs: &[I]) -> Vec<Output<D>>
where
	D: Digest + Clone + Sync,
	I: AsRef<[u8]> + Sync,
{
	inputs
		.par_iter()
		.map(|input| {
			let mut hasher = hasher.clone();
			Digest::update(&mut hasher, input.as_ref());
			hasher.finalize()
		})
		.collect()
}

/// Hashes every input independently on the rayon pool.
#[tracing::instrument(skip_all, level = "trace", fields(count = inputs.len()))]
pub fn digest_many<D, I>(inputs: &[I]) -> Vec<Output<D>>
where
	D: Digest + Clone + Sync,
	I: AsRef<[u8]> + Sync,
{
	digest_many_with(&D::new(), inputs)
}

#[cfg(test)]
mod tests {
	use std::iter::repeat_with;

	use rand::{rngs::StdRng, RngCore, SeedableRng};

	use super::*;
	use crate::{Blake256, Groestl256, Keccak256};

	fn check_matches_sequential<D: Digest + Clone + Sync>() {
		let mut rng = StdRng::seed_from_u64(0);
		let inputs: Vec<Vec<u8>> = repeat_with(|| {
			let mut data = vec![0u8; (rng.next_u32() % 300) as usize];
			rng.fill_bytes(&mut data);
			data
		})
		.take(40)
		.collect();

		let parallel = digest_many::<D, _>(&inputs);
		let sequential: Vec<_> = inputs.iter().map(|input| D::digest(input)).collect();
		assert_eq!(parallel, sequential);
	}

	#[test]
	fn test_matches_sequential() {
		check_matches_sequential::<Blake256>();
		check_matches_sequential::<Groestl256>();
		check_matches_sequential::<Keccak256>();
	}

	#[test]
	fn test_prefix_is_shared() {
		let prefix = Groestl256::new_with_prefix(b"prefix:");
		let inputs = [&b"a"[..], b"bb", b""];
		let results = digest_many_with(&prefix, &inputs);
		for (input, result) in inputs.iter().zip(results) {
			assert_eq!(result, Groestl256::digest([&b"prefix:"[..], *input].concat()));
		}
	}

	#[test]
	fn test_empty_batch() {
		assert!(digest_many::<Blake256, Vec<u8>>(&[]).is_empty());
	}
}
