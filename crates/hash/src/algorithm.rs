// Copyright 2025 Irreducible Inc.

use std::fmt;

use rayon::prelude::*;

use crate::{blake256, groestl256, jh256, keccak256};

/// The 256-bit hash functions, as selected by a proof-of-work hashing scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
	Blake256,
	Groestl256,
	Jh256,
	Keccak256,
}

impl HashAlgorithm {
	pub const ALL: [Self; 4] = [Self::Blake256, Self::Groestl256, Self::Jh256, Self::Keccak256];

	pub fn digest(self, input: &[u8]) -> [u8; 32] {
		match self {
			Self::Blake256 => blake256(input),
			Self::Groestl256 => groestl256(input),
			Self::Jh256 => jh256(input),
			Self::Keccak256 => keccak256(input),
		}
	}

	pub const fn name(self) -> &'static str {
		match self {
			Self::Blake256 => "BLAKE-256",
			Self::Groestl256 => "Groestl-256",
			Self::Jh256 => "JH-256",
			Self::Keccak256 => "Keccak-256",
		}
	}

	/// Hashes every input independently on the rayon pool, in input order.
	#[tracing::instrument(skip_all, level = "trace", fields(algorithm = self.name(), count = inputs.len()))]
	pub fn digest_many<I: AsRef<[u8]> + Sync>(self, inputs: &[I]) -> Vec<[u8; 32]> {
		inputs
			.par_iter()
			.map(|input| self.digest(input.as_ref()))
			.collect()
	}
}

impl fmt::Display for HashAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_dispatch() {
		assert_eq!(HashAlgorithm::Blake256.digest(b"x"), blake256(b"x"));
		assert_eq!(HashAlgorithm::Groestl256.digest(b"x"), groestl256(b"x"));
		assert_eq!(HashAlgorithm::Jh256.digest(b"x"), jh256(b"x"));
		assert_eq!(HashAlgorithm::Keccak256.digest(b"x"), keccak256(b"x"));
	}

	#[test]
	fn test_algorithms_differ() {
		let digests = HashAlgorithm::ALL.map(|alg| alg.digest(b"same input"));
		for i in 0..digests.len() {
			for j in i + 1..digests.len() {
				assert_ne!(digests[i], digests[j]);
			}
		}
	}

	#[test]
	fn test_display() {
		assert_eq!(HashAlgorithm::Jh256.to_string(), "JH-256");
		assert_eq!(format!("{}", HashAlgorithm::Groestl256), "Groestl-256");
	}

	#[test]
	fn test_digest_many() {
		let inputs: Vec<Vec<u8>> = (0..50u8).map(|i| vec![i; i as usize]).collect();
		for alg in HashAlgorithm::ALL {
			let expected: Vec<_> = inputs.iter().map(|input| alg.digest(input)).collect();
			assert_eq!(alg.digest_many(&inputs), expected);
		}
	}
}
