// Copyright 2025 Irreducible Inc.

use cnhash_utils::ensure;

use crate::{
	permutation::{CryptographicPermutation, Permutation},
	Error,
};

pub const LANES: usize = 25;
pub const STATE_BYTES: usize = 8 * LANES;
pub const MAX_ROUNDS: usize = 24;

/// Keccak-f\[1600\] state as 25 little-endian lanes, lane `x + 5y` at index `x + 5 * y`.
pub type State = [u64; LANES];

/// RC\[i\] is the round constant used in the ι step at the ith round.
const RC: [u64; MAX_ROUNDS] = [
	0x0000000000000001,
	0x0000000000008082,
	0x800000000000808a,
	0x8000000080008000,
	0x000000000000808b,
	0x0000000080000001,
	0x8000000080008081,
	0x8000000000008009,
	0x000000000000008a,
	0x0000000000000088,
	0x0000000080008009,
	0x000000008000000a,
	0x000000008000808b,
	0x800000000000008b,
	0x8000000000008089,
	0x8000000000008003,
	0x8000000000008002,
	0x8000000000000080,
	0x000000000000800a,
	0x800000008000000a,
	0x8000000080008081,
	0x8000000000008080,
	0x0000000080000001,
	0x8000000080008008,
];

/// ρ rotation offsets, in the lane order visited by [`PILN`].
#[rustfmt::skip]
const ROTC: [u32; 24] = [
	 1,  3,  6, 10, 15, 21, 28, 36, 45, 55,  2, 14,
	27, 41, 56,  8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// π lane relocation: the lane visited at step `i` of the ρ+π walk starting from lane 1.
#[rustfmt::skip]
const PILN: [usize; 24] = [
	10,  7, 11, 17, 18,  3,  5, 16,  8, 21, 24,  4,
	15, 23, 19, 13, 12,  2, 20, 14, 22,  9,  6,  1,
];

/// Applies the first `rounds` rounds of Keccak-f\[1600\]. Caller guarantees `rounds <= 24`.
pub(crate) fn permute(state: &mut State, rounds: usize) {
	for &rc in &RC[..rounds] {
		// θ
		let bc: [u64; 5] = std::array::from_fn(|x| {
			state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20]
		});
		for x in 0..5 {
			let t = bc[(x + 4) % 5] ^ bc[(x + 1) % 5].rotate_left(1);
			for y in (0..LANES).step_by(5) {
				state[x + y] ^= t;
			}
		}

		// ρ and π
		let mut carry = state[1];
		for (&lane, &rot) in PILN.iter().zip(&ROTC) {
			let next = state[lane];
			state[lane] = carry.rotate_left(rot);
			carry = next;
		}

		// χ
		for y in (0..LANES).step_by(5) {
			let row: [u64; 5] = std::array::from_fn(|x| state[y + x]);
			for x in 0..5 {
				state[y + x] ^= !row[(x + 1) % 5] & row[(x + 2) % 5];
			}
		}

		// ι
		state[0] ^= rc;
	}
}

/// Applies `rounds` rounds of Keccak-f\[1600\] to `state`; `rounds` must lie in `1..=24`.
pub fn keccak_f(state: &mut State, rounds: usize) -> Result<(), Error> {
	ensure!((1..=MAX_ROUNDS).contains(&rounds), Error::InvalidRoundCount { rounds });
	permute(state, rounds);
	Ok(())
}

/// The Keccak-f\[1600\] permutation, optionally reduced to fewer rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeccakF1600 {
	rounds: usize,
}

impl Default for KeccakF1600 {
	fn default() -> Self {
		Self { rounds: MAX_ROUNDS }
	}
}

impl KeccakF1600 {
	pub fn with_rounds(rounds: usize) -> Result<Self, Error> {
		ensure!((1..=MAX_ROUNDS).contains(&rounds), Error::InvalidRoundCount { rounds });
		Ok(Self { rounds })
	}

	pub const fn rounds(&self) -> usize {
		self.rounds
	}
}

impl Permutation<State> for KeccakF1600 {
	fn permute_mut(&self, input: &mut State) {
		permute(input, self.rounds);
	}
}

impl CryptographicPermutation<State> for KeccakF1600 {}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_zero_state() {
		// First lanes of Keccak-f[1600] applied to the all-zero state.
		let state = KeccakF1600::default().permute([0; LANES]);
		assert_eq!(state[0], 0xf1258f7940e1dde7);
		assert_eq!(state[1], 0x84d5ccf933c0478a);
	}

	#[test]
	fn test_round_count_bounds() {
		assert_eq!(KeccakF1600::with_rounds(0), Err(Error::InvalidRoundCount { rounds: 0 }));
		assert_eq!(KeccakF1600::with_rounds(25), Err(Error::InvalidRoundCount { rounds: 25 }));
		assert_eq!(KeccakF1600::with_rounds(12).map(|p| p.rounds()), Ok(12));

		let mut state = [0; LANES];
		assert_eq!(keccak_f(&mut state, 25), Err(Error::InvalidRoundCount { rounds: 25 }));
		assert_eq!(state, [0; LANES]);
	}

	#[test]
	fn test_single_round_of_zero_state() {
		// θ, ρ, π and χ all fix the zero state, leaving only ι.
		let mut state = [0; LANES];
		keccak_f(&mut state, 1).unwrap();
		let mut expected = [0; LANES];
		expected[0] = RC[0];
		assert_eq!(state, expected);
	}

	#[test]
	fn test_rounds_compose() {
		let mut full = [0x0123456789abcdefu64; LANES];
		let mut split = full;
		keccak_f(&mut full, 24).unwrap();

		// The last 12 rounds use constants 12..24, so run the tail by hand.
		permute(&mut split, 12);
		for &rc in &RC[12..] {
			let mut one = split;
			permute(&mut one, 1);
			// Replace round 0's ι with this round's.
			one[0] ^= RC[0] ^ rc;
			split = one;
		}
		assert_eq!(split, full);
	}

	proptest! {
		#[test]
		fn test_vs_tiny_keccak(state in prop::array::uniform25(any::<u64>())) {
			let mut expected = state;
			tiny_keccak::keccakf(&mut expected);
			prop_assert_eq!(KeccakF1600::default().permute(state), expected);
		}
	}
}
