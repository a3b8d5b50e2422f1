// Copyright 2025 Irreducible Inc.

//! BLAKE-256 (the final-round SHA-3 submission with 14 rounds).
//!
//! [`Blake256`] is a plain value owned by the caller: independent hashes never share state.

use std::fmt;

use digest::{
	consts::U32, FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

pub const BLOCK_SIZE: usize = 64;
const ROUNDS: usize = 14;

/// Buffer fill at which a single `0x81` byte completes the padding.
const ONE_BYTE_PAD_LEN: usize = 55;

const IV: [u32; 8] = [
	0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A, 0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

#[rustfmt::skip]
const CONSTANTS: [u32; 16] = [
	0x243F6A88, 0x85A308D3, 0x13198A2E, 0x03707344,
	0xA4093822, 0x299F31D0, 0x082EFA98, 0xEC4E6C89,
	0x452821E6, 0x38D01377, 0xBE5466CF, 0x34E90C6C,
	0xC0AC29B7, 0xC97C50DD, 0x3F84D5B5, 0xB5470917,
];

#[rustfmt::skip]
const SIGMA: [[usize; 16]; 10] = [
	[ 0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15],
	[14, 10,  4,  8,  9, 15, 13,  6,  1, 12,  0,  2, 11,  7,  5,  3],
	[11,  8, 12,  0,  5,  2, 15, 13, 10, 14,  3,  6,  7,  1,  9,  4],
	[ 7,  9,  3,  1, 13, 12, 11, 14,  2,  6,  5, 10,  4,  0, 15,  8],
	[ 9,  0,  5,  7,  2,  4, 10, 15, 14,  1, 11, 12,  6,  8,  3, 13],
	[ 2, 12,  6, 10,  0, 11,  8,  3,  4, 13,  7,  5, 15, 14,  1,  9],
	[12,  5,  1, 15, 14, 13,  4, 10,  0,  7,  6,  3,  9,  2,  8, 11],
	[13, 11,  7, 14, 12,  1,  3,  9,  5,  0, 15,  4,  8,  6,  2, 10],
	[ 6, 15, 14,  9, 11,  3,  0,  8, 12,  2, 13,  7,  1,  4, 10,  5],
	[10,  2,  8,  4,  7,  6,  1,  5, 15, 11,  9, 14,  3, 12, 13,  0],
];

/// State words touched by each `G` call of a round: four columns, then four diagonals.
#[rustfmt::skip]
const G_LANES: [[usize; 4]; 8] = [
	[0, 4,  8, 12], [1, 5,  9, 13], [2, 6, 10, 14], [3, 7, 11, 15],
	[0, 5, 10, 15], [1, 6, 11, 12], [2, 7,  8, 13], [3, 4,  9, 14],
];

const PADDING: [u8; BLOCK_SIZE] = {
	let mut padding = [0u8; BLOCK_SIZE];
	padding[0] = 0x80;
	padding
};

/// Streaming BLAKE-256 context.
#[derive(Clone)]
pub struct Blake256 {
	h: [u32; 8],
	salt: [u32; 4],
	/// Message bits compressed so far. Finalization temporarily winds it back so that padding
	/// bytes are not counted.
	counter: u64,
	buffer: [u8; BLOCK_SIZE],
	/// Always `< BLOCK_SIZE` between calls.
	buffer_len: usize,
	/// Set when the last block holds only padding, which is compressed with a zero counter.
	null_counter: bool,
}

impl Default for Blake256 {
	fn default() -> Self {
		Self {
			h: IV,
			salt: [0; 4],
			counter: 0,
			buffer: [0; BLOCK_SIZE],
			buffer_len: 0,
			null_counter: false,
		}
	}
}

impl Blake256 {
	fn absorb(&mut self, mut data: &[u8]) {
		if self.buffer_len > 0 {
			let fill = BLOCK_SIZE - self.buffer_len;
			if data.len() < fill {
				self.buffer[self.buffer_len..self.buffer_len + data.len()].copy_from_slice(data);
				self.buffer_len += data.len();
				return;
			}

			self.buffer[self.buffer_len..].copy_from_slice(&data[..fill]);
			let block = self.buffer;
			self.compress_next(&block);
			self.buffer_len = 0;
			data = &data[fill..];
		}

		let mut blocks = data.chunks_exact(BLOCK_SIZE);
		for block in &mut blocks {
			self.compress_next(block);
		}

		let remainder = blocks.remainder();
		self.buffer[..remainder.len()].copy_from_slice(remainder);
		self.buffer_len = remainder.len();
	}

	#[inline]
	fn compress_next(&mut self, block: &[u8]) {
		self.counter = self.counter.wrapping_add(8 * BLOCK_SIZE as u64);
		self.compress(block);
	}

	fn compress(&mut self, block: &[u8]) {
		let mut m = [0u32; 16];
		for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
			*word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
		}

		let mut v = [0u32; 16];
		v[..8].copy_from_slice(&self.h);
		for i in 0..4 {
			v[8 + i] = self.salt[i] ^ CONSTANTS[i];
		}
		v[12..].copy_from_slice(&CONSTANTS[4..8]);
		if !self.null_counter {
			let lo = self.counter as u32;
			let hi = (self.counter >> 32) as u32;
			v[12] ^= lo;
			v[13] ^= lo;
			v[14] ^= hi;
			v[15] ^= hi;
		}

		for round in 0..ROUNDS {
			let sigma = &SIGMA[round % 10];
			for (i, &[a, b, c, d]) in G_LANES.iter().enumerate() {
				g(&mut v, [a, b, c, d], &m, sigma[2 * i], sigma[2 * i + 1]);
			}
		}

		for (i, h) in self.h.iter_mut().enumerate() {
			*h ^= self.salt[i % 4] ^ v[i] ^ v[i + 8];
		}
	}

	fn finalize_inner(&mut self) -> [u8; 32] {
		let buffered_bits = (self.buffer_len as u64) << 3;
		let length_field = self.counter.wrapping_add(buffered_bits).to_be_bytes();

		if self.buffer_len == ONE_BYTE_PAD_LEN {
			self.counter = self.counter.wrapping_sub(8);
			self.absorb(&[0x81]);
		} else {
			if self.buffer_len < ONE_BYTE_PAD_LEN {
				if self.buffer_len == 0 {
					self.null_counter = true;
				}
				let pad_len = ONE_BYTE_PAD_LEN - self.buffer_len;
				self.counter = self.counter.wrapping_sub(440 - buffered_bits);
				self.absorb(&PADDING[..pad_len]);
			} else {
				// The marker byte does not fit: finish this block, then a padding-only one.
				let pad_len = BLOCK_SIZE - self.buffer_len;
				self.counter = self.counter.wrapping_sub(512 - buffered_bits);
				self.absorb(&PADDING[..pad_len]);
				self.counter = self.counter.wrapping_sub(440);
				self.absorb(&PADDING[1..=ONE_BYTE_PAD_LEN]);
				self.null_counter = true;
			}
			self.absorb(&[0x01]);
			self.counter = self.counter.wrapping_sub(8);
		}
		self.counter = self.counter.wrapping_sub(64);
		self.absorb(&length_field);
		debug_assert_eq!(self.buffer_len, 0);

		let mut out = [0u8; 32];
		for (chunk, h) in out.chunks_exact_mut(4).zip(&self.h) {
			chunk.copy_from_slice(&h.to_be_bytes());
		}
		out
	}
}

#[inline(always)]
fn g(v: &mut [u32; 16], [a, b, c, d]: [usize; 4], m: &[u32; 16], x: usize, y: usize) {
	v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[x] ^ CONSTANTS[y]);
	v[d] = (v[d] ^ v[a]).rotate_right(16);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(12);
	v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[y] ^ CONSTANTS[x]);
	v[d] = (v[d] ^ v[a]).rotate_right(8);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(7);
}

impl HashMarker for Blake256 {}

impl OutputSizeUser for Blake256 {
	type OutputSize = U32;
}

impl Update for Blake256 {
	fn update(&mut self, data: &[u8]) {
		self.absorb(data);
	}
}

impl FixedOutput for Blake256 {
	fn finalize_into(mut self, out: &mut Output<Self>) {
		out.copy_from_slice(&self.finalize_inner());
	}
}

impl Reset for Blake256 {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl FixedOutputReset for Blake256 {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		out.copy_from_slice(&self.finalize_inner());
		Reset::reset(self);
	}
}

impl fmt::Debug for Blake256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Blake256 { ... }")
	}
}

/// One-shot BLAKE-256.
#[tracing::instrument(skip_all, level = "trace", fields(len = input.len()))]
pub fn blake256(input: &[u8]) -> [u8; 32] {
	let mut hasher = Blake256::default();
	hasher.absorb(input);
	hasher.finalize_inner()
}
