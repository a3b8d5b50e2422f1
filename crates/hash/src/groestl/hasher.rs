// Copyright (c) 2020-2025 The RustCrypto Project Developers
// Copyright 2025 Irreducible Inc.

// The core/wrapper split follows the RustCrypto `groestl` crate.

use core::fmt;

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	typenum::{U32, U64},
	Digest, HashMarker, Output, Reset,
};

use super::{
	compression::compress,
	permutation::{p, State, STATE_SIZE},
};

const BLOCK_BITS: u64 = 8 * STATE_SIZE as u64;
const OUTPUT_SIZE: usize = 32;

/// Number of blocks in the padded message, the value encoded in its final 8 bytes.
///
/// With `n` message bits, `w = (-n - 65) mod 512` zero bits are inserted between the `1` marker
/// bit and the 64-bit block count.
pub(super) fn padded_block_count(full_blocks: u64, tail_len: usize) -> u64 {
	let n = full_blocks * BLOCK_BITS + 8 * tail_len as u64;
	let w = (BLOCK_BITS - (n + 65) % BLOCK_BITS) % BLOCK_BITS;
	(n + w + 65) / BLOCK_BITS
}

/// Lowest-level core hasher state of Grøstl-256.
#[derive(Clone)]
pub struct Groestl256Core {
	state: State,
	blocks_len: u64,
}

/// Grøstl-256 hasher state.
pub type Groestl256 = CoreWrapper<Groestl256Core>;

impl Default for Groestl256Core {
	fn default() -> Self {
		let mut state = [0u8; STATE_SIZE];
		state[STATE_SIZE - 8..].copy_from_slice(&(8 * OUTPUT_SIZE as u64).to_be_bytes());
		Self {
			state,
			blocks_len: 0,
		}
	}
}

impl HashMarker for Groestl256Core {}

impl BlockSizeUser for Groestl256Core {
	type BlockSize = U64;
}

impl BufferKindUser for Groestl256Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Groestl256Core {
	type OutputSize = U32;
}

impl UpdateCore for Groestl256Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		self.blocks_len += blocks.len() as u64;
		for block in blocks {
			compress(&mut self.state, block.as_ref());
		}
	}
}

impl FixedOutputCore for Groestl256Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		// The block count is always written big-endian, independent of the host.
		let blocks_len = padded_block_count(self.blocks_len, buffer.get_pos());
		buffer.len64_padding_be(blocks_len, |block| compress(&mut self.state, block.as_ref()));

		let mut res = self.state;
		p(&mut res);
		for (r, h) in res.iter_mut().zip(&self.state) {
			*r ^= h;
		}
		out.copy_from_slice(&res[STATE_SIZE - OUTPUT_SIZE..]);
	}
}

impl Reset for Groestl256Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Groestl256Core {
	#[inline]
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Groestl256")
	}
}

impl fmt::Debug for Groestl256Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Groestl256Core { ... }")
	}
}

/// One-shot Grøstl-256.
#[tracing::instrument(skip_all, level = "trace", fields(len = input.len()))]
pub fn groestl256(input: &[u8]) -> [u8; 32] {
	Groestl256::digest(input).into()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_padded_block_count() {
		// Padding needs 1 marker byte and 8 length bytes in the last block.
		assert_eq!(padded_block_count(0, 0), 1);
		assert_eq!(padded_block_count(0, 55), 1);
		assert_eq!(padded_block_count(0, 56), 2);
		assert_eq!(padded_block_count(0, 63), 2);
		assert_eq!(padded_block_count(1, 0), 2);
		assert_eq!(padded_block_count(7, 60), 9);
	}

	#[test]
	fn test_padded_block_count_matches_remaining_rule() {
		for full_blocks in 0..3u64 {
			for tail_len in 0..STATE_SIZE {
				let remaining = STATE_SIZE - tail_len;
				let expected = if remaining <= 8 {
					full_blocks + 2
				} else {
					full_blocks + 1
				};
				assert_eq!(padded_block_count(full_blocks, tail_len), expected);
			}
		}
	}

	#[test]
	fn test_initial_state_encodes_output_size() {
		let core = Groestl256Core::default();
		assert_eq!(core.state[62..], [0x01, 0x00]);
		assert!(core.state[..62].iter().all(|&b| b == 0));
	}
}
