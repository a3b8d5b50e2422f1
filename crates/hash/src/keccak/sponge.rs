// Copyright 2025 Irreducible Inc.

use cnhash_utils::ensure;

use super::permutation::{permute, State, LANES, MAX_ROUNDS, STATE_BYTES};
use crate::Error;

/// Rate of the 32-byte digest sponge.
pub const DIGEST_RATE: usize = STATE_BYTES - 2 * DIGEST_SIZE;
/// Rate used when the whole state is the output.
pub const RAW_STATE_RATE: usize = 168;

const DIGEST_SIZE: usize = 32;
const MAX_TRUNCATED_OUTPUT: usize = 96;

/// Domain byte appended directly after the message (pre-standard Keccak, not SHA-3).
pub(super) const DOMAIN: u8 = 0x01;

fn rate_for(output_size: usize) -> Result<usize, Error> {
	if output_size == STATE_BYTES {
		return Ok(RAW_STATE_RATE);
	}
	ensure!(
		(4..=MAX_TRUNCATED_OUTPUT).contains(&output_size) && output_size % 4 == 0,
		Error::InvalidOutputLength { len: output_size }
	);
	Ok(STATE_BYTES - 2 * output_size)
}

/// XORs `block` into the leading lanes of `state`. `block.len()` is a multiple of 8.
pub(super) fn xor_block(state: &mut State, block: &[u8]) {
	for (lane, bytes) in state.iter_mut().zip(block.chunks_exact(8)) {
		*lane ^= u64::from_le_bytes(std::array::from_fn(|i| bytes[i]));
	}
}

pub(super) fn state_bytes(state: &State) -> [u8; STATE_BYTES] {
	let mut out = [0u8; STATE_BYTES];
	for (chunk, lane) in out.chunks_exact_mut(8).zip(state) {
		chunk.copy_from_slice(&lane.to_le_bytes());
	}
	out
}

/// Absorbs `input` with the given rate, including the final padded block.
fn absorb(input: &[u8], rate: usize) -> State {
	let mut state = [0u64; LANES];
	let mut blocks = input.chunks_exact(rate);
	for block in &mut blocks {
		xor_block(&mut state, block);
		permute(&mut state, MAX_ROUNDS);
	}

	let tail = blocks.remainder();
	let mut last = [0u8; STATE_BYTES];
	last[..tail.len()].copy_from_slice(tail);
	last[tail.len()] = DOMAIN;
	last[rate - 1] |= 0x80;
	xor_block(&mut state, &last[..rate]);
	permute(&mut state, MAX_ROUNDS);
	state
}

/// The Keccak sponge with capacity `2 * output_size`, squeezing `output_size` bytes of the state.
///
/// `output_size` is a multiple of 4 in `4..=96`, or 200 for the whole state (rate 168).
#[tracing::instrument(skip_all, level = "trace", fields(len = input.len(), output_size = output_size))]
pub fn sponge(input: &[u8], output_size: usize) -> Result<Vec<u8>, Error> {
	let rate = rate_for(output_size)?;
	let state = absorb(input, rate);
	Ok(state_bytes(&state)[..output_size].to_vec())
}

/// Keccak-256 as submitted to the SHA-3 competition: `0x01` domain padding, rate 136.
///
/// This is not SHA3-256, which pads with `0x06` and gives different digests.
#[tracing::instrument(skip_all, level = "trace", fields(len = input.len()))]
pub fn keccak256(input: &[u8]) -> [u8; 32] {
	let state = absorb(input, DIGEST_RATE);
	let mut out = [0u8; DIGEST_SIZE];
	out.copy_from_slice(&state_bytes(&state)[..DIGEST_SIZE]);
	out
}

/// The first `output_len` bytes of the Keccak-256 digest, for `output_len` in `1..=32`.
#[tracing::instrument(skip_all, level = "trace", fields(len = input.len(), output_len = output_len))]
pub fn keccak(input: &[u8], output_len: usize) -> Result<Vec<u8>, Error> {
	ensure!(
		(1..=DIGEST_SIZE).contains(&output_len),
		Error::InvalidOutputLength { len: output_len }
	);
	Ok(keccak256(input)[..output_len].to_vec())
}

/// The whole Keccak-f\[1600\] state after absorbing `input` at rate 168.
#[tracing::instrument(skip_all, level = "trace", fields(len = input.len()))]
pub fn keccak1600(input: &[u8]) -> [u8; STATE_BYTES] {
	state_bytes(&absorb(input, RAW_STATE_RATE))
}
