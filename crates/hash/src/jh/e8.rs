// Copyright 2025 Irreducible Inc.

use crate::permutation::{CryptographicPermutation, Permutation};

pub const STATE_SIZE: usize = 128;

/// The 1024-bit state seen as 256 four-bit words.
const NIBBLES: usize = 2 * STATE_SIZE;
const ROUNDS: usize = 42;

#[rustfmt::skip]
const SBOX: [[u8; 16]; 2] = [
	[9, 0, 4, 11, 13, 12, 3, 15, 1, 10, 2, 6, 7, 5, 8, 14],
	[3, 12, 6, 13, 5, 7, 1, 9, 15, 2, 0, 4, 11, 10, 14, 8],
];

/// First 256 bits of the fractional part of √2, one nibble per entry.
#[rustfmt::skip]
const RC0: [u8; 64] = [
	0x6, 0xa, 0x0, 0x9, 0xe, 0x6, 0x6, 0x7, 0xf, 0x3, 0xb, 0xc, 0xc, 0x9, 0x0, 0x8,
	0xb, 0x2, 0xf, 0xb, 0x1, 0x3, 0x6, 0x6, 0xe, 0xa, 0x9, 0x5, 0x7, 0xd, 0x3, 0xe,
	0x3, 0xa, 0xd, 0xe, 0xc, 0x1, 0x7, 0x5, 0x1, 0x2, 0x7, 0x7, 0x5, 0x0, 0x9, 0x9,
	0xd, 0xa, 0x2, 0xf, 0x5, 0x9, 0x0, 0xb, 0x0, 0x6, 0x6, 0x7, 0x3, 0x2, 0x2, 0xa,
];

/// The MDS layer over GF(2⁴) applied to a pair of nibbles.
#[inline]
fn linear(a: u8, b: u8) -> (u8, u8) {
	let b = b ^ (((a << 1) ^ (a >> 3) ^ ((a >> 2) & 2)) & 0xf);
	let a = a ^ (((b << 1) ^ (b >> 3) ^ ((b >> 2) & 2)) & 0xf);
	(a, b)
}

/// One round over `state.len()` nibbles: S-boxes, linear layer, then the permutation `P`.
///
/// Used with 256 nibbles for the state (`R8`) and 64 nibbles for the round constant (`R6`).
fn round(state: &mut [u8], select_sbox: impl Fn(usize) -> usize) {
	let n = state.len();
	let half = n / 2;

	let mut tmp = [0u8; NIBBLES];
	let tmp = &mut tmp[..n];
	for (i, t) in tmp.iter_mut().enumerate() {
		*t = SBOX[select_sbox(i)][state[i] as usize];
	}
	for pair in tmp.chunks_exact_mut(2) {
		(pair[0], pair[1]) = linear(pair[0], pair[1]);
	}

	// Swap within groups of four, un-interleave, then swap pairs in the upper half.
	for quad in tmp.chunks_exact_mut(4) {
		quad.swap(2, 3);
	}
	for i in 0..half {
		state[i] = tmp[2 * i];
		state[i + half] = tmp[2 * i + 1];
	}
	for pair in state[half..].chunks_exact_mut(2) {
		pair.swap(0, 1);
	}
}

/// The bijective function `E8` on a 1024-bit state.
pub(super) fn e8(h: &mut [u8; STATE_SIZE]) {
	let bit = |i: usize| (h[i >> 3] >> (7 - (i & 7))) & 1;
	let mut grouped = [0u8; NIBBLES];
	for (i, nibble) in grouped.iter_mut().enumerate() {
		*nibble = (bit(i) << 3) | (bit(i + 256) << 2) | (bit(i + 512) << 1) | bit(i + 768);
	}

	let mut state = [0u8; NIBBLES];
	for i in 0..NIBBLES / 2 {
		state[2 * i] = grouped[i];
		state[2 * i + 1] = grouped[i + NIBBLES / 2];
	}

	let mut rc = RC0;
	for _ in 0..ROUNDS {
		round(&mut state, |i| ((rc[i >> 2] >> (3 - (i & 3))) & 1) as usize);
		round(&mut rc, |_| 0);
	}

	for i in 0..NIBBLES / 2 {
		grouped[i] = state[2 * i];
		grouped[i + NIBBLES / 2] = state[2 * i + 1];
	}

	h.fill(0);
	for (i, nibble) in grouped.iter().enumerate() {
		for k in 0..4 {
			h[(i + 256 * k) >> 3] |= ((nibble >> (3 - k)) & 1) << (7 - (i & 7));
		}
	}
}

/// `E8` as a standalone permutation of the 128-byte JH state.
#[derive(Debug, Clone, Copy, Default)]
pub struct JhE8;

impl Permutation<[u8; STATE_SIZE]> for JhE8 {
	fn permute_mut(&self, input: &mut [u8; STATE_SIZE]) {
		e8(input);
	}
}

impl CryptographicPermutation<[u8; STATE_SIZE]> for JhE8 {}
