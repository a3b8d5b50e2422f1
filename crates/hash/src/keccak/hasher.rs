// Copyright 2025 Irreducible Inc.

use core::fmt;

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	typenum::{U136, U32},
	HashMarker, Output, Reset,
};

use super::{
	permutation::{permute, State, LANES, MAX_ROUNDS},
	sponge::{state_bytes, xor_block, DOMAIN},
};

/// Lowest-level core hasher state of Keccak-256.
#[derive(Clone, Default)]
pub struct Keccak256Core {
	state: State,
}

/// Streaming Keccak-256, producing the same digest as [`keccak256`](super::keccak256).
pub type Keccak256 = CoreWrapper<Keccak256Core>;

impl HashMarker for Keccak256Core {}

impl BlockSizeUser for Keccak256Core {
	type BlockSize = U136;
}

impl BufferKindUser for Keccak256Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Keccak256Core {
	type OutputSize = U32;
}

impl UpdateCore for Keccak256Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		for block in blocks {
			xor_block(&mut self.state, block);
			permute(&mut self.state, MAX_ROUNDS);
		}
	}
}

impl FixedOutputCore for Keccak256Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let pos = buffer.get_pos();
		let block = buffer.pad_with_zeros();
		block[pos] = DOMAIN;
		let n = block.len();
		block[n - 1] |= 0x80;

		xor_block(&mut self.state, block);
		permute(&mut self.state, MAX_ROUNDS);
		let out_len = out.len();
		out.copy_from_slice(&state_bytes(&self.state)[..out_len]);
	}
}

impl Reset for Keccak256Core {
	#[inline]
	fn reset(&mut self) {
		self.state = [0; LANES];
	}
}

impl AlgorithmName for Keccak256Core {
	#[inline]
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Keccak256")
	}
}

impl fmt::Debug for Keccak256Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Keccak256Core { ... }")
	}
}
