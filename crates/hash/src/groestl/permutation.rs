// Copyright 2024-2025 Irreducible Inc.

use cnhash_field::{mul_by_x, SBOX};

use crate::permutation::{CryptographicPermutation, Permutation};

pub const STATE_SIZE: usize = 64;
pub const ROUNDS: usize = 10;

/// An 8x8 byte matrix stored column by column: byte `k` is row `k % 8` of column `k / 8`.
pub type State = [u8; STATE_SIZE];

const SHIFT_P: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
const SHIFT_Q: [usize; 8] = [1, 3, 5, 7, 0, 2, 4, 6];

fn add_round_constant_p(state: &mut State, round: u8) {
	for (col, column) in state.chunks_exact_mut(8).enumerate() {
		column[0] ^= ((col as u8) << 4) ^ round;
	}
}

fn add_round_constant_q(state: &mut State, round: u8) {
	for (col, column) in state.chunks_exact_mut(8).enumerate() {
		for b in column.iter_mut() {
			*b ^= 0xff;
		}
		column[7] ^= ((col as u8) << 4) ^ round;
	}
}

#[inline]
fn sub_bytes(state: &mut State) {
	for b in state.iter_mut() {
		*b = SBOX[*b as usize];
	}
}

/// Rotates row `row` left by `shifts[row]` columns.
#[inline]
fn shift_bytes(state: &mut State, shifts: &[usize; 8]) {
	let input = *state;
	for (row, &shift) in shifts.iter().enumerate() {
		for col in 0..8 {
			state[col * 8 + row] = input[((col + shift) % 8) * 8 + row];
		}
	}
}

/// Multiplies every column by the circulant matrix `circ(2, 2, 3, 4, 5, 3, 5, 7)`, evaluated
/// with XORs and two doublings per byte.
#[inline]
fn mix_bytes(state: &mut State) {
	for column in state.chunks_exact_mut(8) {
		let a: [u8; 8] = std::array::from_fn(|i| column[i]);
		let x: [u8; 8] = std::array::from_fn(|i| a[i] ^ a[(i + 1) % 8]);
		let y: [u8; 8] = std::array::from_fn(|i| x[i] ^ x[(i + 3) % 8]);
		let z: [u8; 8] = std::array::from_fn(|i| x[i] ^ x[(i + 2) % 8] ^ a[(i + 6) % 8]);
		for (i, b) in column.iter_mut().enumerate() {
			*b = mul_by_x(mul_by_x(y[(i + 3) % 8]) ^ z[(i + 7) % 8]) ^ z[(i + 4) % 8];
		}
	}
}

#[inline]
fn permute(state: &mut State, add_round_constant: fn(&mut State, u8), shifts: &[usize; 8]) {
	for round in 0..ROUNDS {
		add_round_constant(state, round as u8);
		sub_bytes(state);
		shift_bytes(state, shifts);
		mix_bytes(state);
	}
}

pub(super) fn p(state: &mut State) {
	permute(state, add_round_constant_p, &SHIFT_P);
}

pub(super) fn q(state: &mut State) {
	permute(state, add_round_constant_q, &SHIFT_Q);
}

/// The Grøstl-512 `P` permutation (used by the 256-bit variant).
#[derive(Debug, Default, Clone, Copy)]
pub struct GroestlP;

impl Permutation<State> for GroestlP {
	fn permute_mut(&self, input: &mut State) {
		p(input);
	}
}

impl CryptographicPermutation<State> for GroestlP {}

/// The Grøstl-512 `Q` permutation (used by the 256-bit variant).
#[derive(Debug, Default, Clone, Copy)]
pub struct GroestlQ;

impl Permutation<State> for GroestlQ {
	fn permute_mut(&self, input: &mut State) {
		q(input);
	}
}

impl CryptographicPermutation<State> for GroestlQ {}

#[cfg(test)]
mod tests {
	use cnhash_field::multiply;

	use super::*;

	#[test]
	fn test_mix_bytes_matches_circulant() {
		const CIRCULANT: [u8; 8] = [2, 2, 3, 4, 5, 3, 5, 7];

		let mut state: State = std::array::from_fn(|i| (i as u8).wrapping_mul(29) ^ 0xa5);
		let expected: State = std::array::from_fn(|k| {
			let (col, row) = (k / 8, k % 8);
			(0..8).fold(0, |acc, j| {
				acc ^ multiply(state[col * 8 + (row + j) % 8], CIRCULANT[j])
			})
		});
		mix_bytes(&mut state);
		assert_eq!(state, expected);
	}

	#[test]
	fn test_shift_bytes_q_offsets() {
		let mut state: State = std::array::from_fn(|i| i as u8);
		shift_bytes(&mut state, &SHIFT_Q);
		// Row 0 moves left by one column, row 3 by seven, row 4 stays.
		assert_eq!(state[0], 8);
		assert_eq!(state[3], 7 * 8 + 3);
		assert_eq!(state[4], 4);
	}

	#[test]
	fn test_round_constants() {
		let mut state = [0u8; STATE_SIZE];
		add_round_constant_p(&mut state, 3);
		assert_eq!(state[0], 0x03);
		assert_eq!(state[8], 0x13);
		assert_eq!(state[1], 0x00);

		let mut state = [0u8; STATE_SIZE];
		add_round_constant_q(&mut state, 3);
		assert_eq!(state[0], 0xff);
		assert_eq!(state[7], 0xfc);
		assert_eq!(state[15], 0xec);
	}
}
