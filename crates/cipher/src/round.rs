// Copyright 2025 Irreducible Inc.

use cnhash_field::{sub_byte, MUL_2, MUL_3};
use cnhash_utils::ensure;

use crate::{
	key_schedule::{BLOCK_SIZE, COLUMN_LENGTH, MIN_SCHEDULE_LEN, PSEUDO_ROUNDS},
	Error,
};

fn check_block(len: usize, offset: usize, required: usize) -> Result<(), Error> {
	ensure!(
		offset
			.checked_add(required)
			.is_some_and(|end| end <= len),
		Error::InvalidBlockSize {
			len,
			offset,
			required
		}
	);
	Ok(())
}

/// One round on the block at `data[block_offset..block_offset + 16]`: `SubBytes`, `ShiftRows`,
/// `MixColumns`, then XOR with `schedule[key_offset..key_offset + 16]`.
pub fn encrypt_round(
	schedule: &[u8],
	data: &mut [u8],
	block_offset: usize,
	key_offset: usize,
) -> Result<(), Error> {
	check_block(data.len(), block_offset, BLOCK_SIZE)?;
	check_block(schedule.len(), key_offset, BLOCK_SIZE)?;

	round(
		&mut data[block_offset..block_offset + BLOCK_SIZE],
		&schedule[key_offset..key_offset + BLOCK_SIZE],
	);
	Ok(())
}

/// Applies the ten pseudo-rounds to the block at `data[offset..offset + 16]`, round `i` keyed
/// with `schedule[16 * i..16 * (i + 1)]`.
pub fn pseudo_encrypt_ecb(schedule: &[u8], data: &mut [u8], offset: usize) -> Result<(), Error> {
	check_block(schedule.len(), 0, MIN_SCHEDULE_LEN)?;
	check_block(data.len(), offset, BLOCK_SIZE)?;

	pseudo_encrypt_ecb_unchecked(schedule, data, offset);
	Ok(())
}

/// Caller guarantees `schedule.len() >= MIN_SCHEDULE_LEN` and a whole block at `offset`.
pub(crate) fn pseudo_encrypt_ecb_unchecked(schedule: &[u8], data: &mut [u8], offset: usize) {
	let block = &mut data[offset..offset + BLOCK_SIZE];
	for round_key in schedule.chunks_exact(BLOCK_SIZE).take(PSEUDO_ROUNDS) {
		round(block, round_key);
	}
}

/// `block` and `round_key` are both exactly one block long.
#[inline]
fn round(block: &mut [u8], round_key: &[u8]) {
	sub_bytes(block);
	shift_rows(block);
	mix_columns(block);
	for (b, k) in block.iter_mut().zip(round_key) {
		*b ^= k;
	}
}

#[inline]
fn sub_bytes(block: &mut [u8]) {
	for b in block.iter_mut() {
		*b = sub_byte(*b);
	}
}

/// Row `r` of the column-major state rotates left by `r`, i.e. `out[i] = in[5 * i mod 16]`.
#[inline]
fn shift_rows(block: &mut [u8]) {
	let mut input = [0u8; BLOCK_SIZE];
	input.copy_from_slice(block);
	for (i, b) in block.iter_mut().enumerate() {
		*b = input[(i * 5) % BLOCK_SIZE];
	}
}

#[inline]
fn mix_columns(block: &mut [u8]) {
	let mul2 = |b: u8| MUL_2[b as usize];
	let mul3 = |b: u8| MUL_3[b as usize];

	for column in block.chunks_exact_mut(COLUMN_LENGTH) {
		let [a0, a1, a2, a3] = [column[0], column[1], column[2], column[3]];
		column[0] = mul2(a0) ^ mul3(a1) ^ a2 ^ a3;
		column[1] = a0 ^ mul2(a1) ^ mul3(a2) ^ a3;
		column[2] = a0 ^ a1 ^ mul2(a2) ^ mul3(a3);
		column[3] = mul3(a0) ^ a1 ^ a2 ^ mul2(a3);
	}
}
