// Copyright 2025 Irreducible Inc.

//! JH-256: a 1024-bit bijective permutation `E8` chained over 512-bit message blocks.
//!
//! The context accepts messages of arbitrary bit length. Only the last fragment of a message may
//! end on a partial byte.

mod e8;

use std::fmt;

use cnhash_utils::ensure;
pub use e8::{JhE8, STATE_SIZE};

use crate::Error;

pub const BLOCK_SIZE: usize = 64;
const BLOCK_BITS: usize = 8 * BLOCK_SIZE;
const OUTPUT_SIZE: usize = 32;

/// Streaming JH-256 context.
#[derive(Clone)]
pub struct Jh256 {
	state: [u8; STATE_SIZE],
	buffer: [u8; BLOCK_SIZE],
	/// Bits currently held in `buffer`, always `< BLOCK_BITS`.
	buffer_bits: usize,
	/// Total message bits absorbed.
	bit_len: u64,
}

impl Default for Jh256 {
	fn default() -> Self {
		let mut state = [0u8; STATE_SIZE];
		state[..2].copy_from_slice(&(8 * OUTPUT_SIZE as u16).to_be_bytes());
		let mut jh = Self {
			state,
			buffer: [0; BLOCK_SIZE],
			buffer_bits: 0,
			bit_len: 0,
		};
		jh.f8();
		jh
	}
}

impl Jh256 {
	pub fn new() -> Self {
		Self::default()
	}

	/// Absorbs whole bytes.
	pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
		self.update_bits(data, 8 * data.len() as u64)
	}

	/// Absorbs the first `bit_len` bits of `data`, most significant bit of each byte first.
	///
	/// Unused low bits of a trailing partial byte are ignored. Once a partial byte has been
	/// absorbed the message is closed, and further non-empty updates fail with
	/// [`Error::MisalignedInput`].
	pub fn update_bits(&mut self, data: &[u8], bit_len: u64) -> Result<(), Error> {
		let available = 8 * data.len() as u64;
		ensure!(bit_len <= available, Error::InvalidInputSize { bit_len, available });
		if bit_len == 0 {
			return Ok(());
		}
		ensure!(self.buffer_bits % 8 == 0, Error::MisalignedInput);

		self.bit_len += bit_len;
		let full_bytes = (bit_len / 8) as usize;
		let tail_bits = (bit_len % 8) as u32;
		self.absorb(&data[..full_bytes]);

		if tail_bits != 0 {
			// The buffer holds at most 63 whole bytes here, so a partial byte never fills it.
			let mask = 0xffu8 << (8 - tail_bits);
			self.buffer[self.buffer_bits / 8] = data[full_bytes] & mask;
			self.buffer_bits += tail_bits as usize;
		}
		Ok(())
	}

	pub fn finalize(mut self) -> [u8; OUTPUT_SIZE] {
		self.finalize_inner()
	}

	pub fn finalize_reset(&mut self) -> [u8; OUTPUT_SIZE] {
		let out = self.finalize_inner();
		*self = Self::default();
		out
	}

	/// Message bits absorbed so far.
	pub fn bit_len(&self) -> u64 {
		self.bit_len
	}

	fn absorb(&mut self, mut data: &[u8]) {
		let pos = self.buffer_bits / 8;
		if pos > 0 {
			let take = data.len().min(BLOCK_SIZE - pos);
			self.buffer[pos..pos + take].copy_from_slice(&data[..take]);
			self.buffer_bits += 8 * take;
			data = &data[take..];
			if self.buffer_bits < BLOCK_BITS {
				return;
			}
			self.f8();
			self.buffer_bits = 0;
		}

		let mut blocks = data.chunks_exact(BLOCK_SIZE);
		for block in &mut blocks {
			self.buffer.copy_from_slice(block);
			self.f8();
		}
		let remainder = blocks.remainder();
		self.buffer[..remainder.len()].copy_from_slice(remainder);
		self.buffer_bits = 8 * remainder.len();
	}

	/// The compression function: `E8` with the block XORed in before and after.
	fn f8(&mut self) {
		for (h, m) in self.state[..BLOCK_SIZE].iter_mut().zip(&self.buffer) {
			*h ^= m;
		}
		e8::e8(&mut self.state);
		for (h, m) in self.state[BLOCK_SIZE..].iter_mut().zip(&self.buffer) {
			*h ^= m;
		}
	}

	fn length_block(&mut self) {
		self.buffer = [0; BLOCK_SIZE];
		self.buffer[BLOCK_SIZE - 8..].copy_from_slice(&self.bit_len.to_be_bytes());
	}

	fn finalize_inner(&mut self) -> [u8; OUTPUT_SIZE] {
		if self.buffer_bits == 0 {
			self.length_block();
			self.buffer[0] = 0x80;
			self.f8();
		} else {
			let index = self.buffer_bits / 8;
			let partial = usize::from(self.buffer_bits % 8 != 0);
			self.buffer[index + partial..].fill(0);
			self.buffer[index] |= 0x80 >> (self.buffer_bits % 8);
			self.f8();

			self.length_block();
			self.f8();
		}

		let mut out = [0u8; OUTPUT_SIZE];
		out.copy_from_slice(&self.state[STATE_SIZE - OUTPUT_SIZE..]);
		out
	}
}

impl fmt::Debug for Jh256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Jh256")
			.field("bit_len", &self.bit_len)
			.finish_non_exhaustive()
	}
}

/// One-shot JH-256.
#[tracing::instrument(skip_all, level = "trace", fields(len = input.len()))]
pub fn jh256(input: &[u8]) -> [u8; 32] {
	let mut jh = Jh256::new();
	jh.absorb(input);
	jh.bit_len = 8 * input.len() as u64;
	jh.finalize()
}
