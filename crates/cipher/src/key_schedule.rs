// Copyright 2025 Irreducible Inc.

use cnhash_field::{sub_byte, RCON};
use cnhash_utils::ensure;

use crate::{round::pseudo_encrypt_ecb_unchecked, Error};

/// Size in bytes of the cipher block and of one round key.
pub const BLOCK_SIZE: usize = 16;
/// Size in bytes of one key-schedule word.
pub const ROUND_KEY_LENGTH: usize = 4;
/// Number of bytes in a state column.
pub const COLUMN_LENGTH: usize = 4;
/// Round keys generated on top of the `key_len / ROUND_KEY_LENGTH` copied from the key.
pub const ROUND_BASE: usize = 7;
/// Rounds applied by the pseudo-encryption.
pub const PSEUDO_ROUNDS: usize = 10;
/// Schedule bytes consumed by the pseudo-encryption.
pub const MIN_SCHEDULE_LEN: usize = PSEUDO_ROUNDS * BLOCK_SIZE;

/// Length of the expanded schedule for a key of `key_len` bytes.
pub const fn schedule_len(key_len: usize) -> usize {
	(key_len / ROUND_KEY_LENGTH + ROUND_BASE) * ROUND_KEY_LENGTH * COLUMN_LENGTH
}

/// An expanded key.
///
/// Always holds at least [`MIN_SCHEDULE_LEN`] bytes, so the typed encryption methods cannot fail.
#[derive(Clone, PartialEq, Eq)]
pub struct KeySchedule {
	bytes: Vec<u8>,
}

impl KeySchedule {
	pub fn new(key: &[u8]) -> Result<Self, Error> {
		expand_key(key)
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}

	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// The 16-byte round key used by round `round`.
	pub fn round_key(&self, round: usize) -> Option<&[u8]> {
		self.bytes
			.get(round * BLOCK_SIZE..(round + 1) * BLOCK_SIZE)
	}

	/// Applies the ten pseudo-rounds to a single block in place.
	pub fn pseudo_encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
		pseudo_encrypt_ecb_unchecked(&self.bytes, block, 0);
	}

	/// Applies the ten pseudo-rounds to every 16-byte block of `data` independently.
	#[tracing::instrument(skip_all, level = "trace", fields(len = data.len()))]
	pub fn pseudo_encrypt_blocks(&self, data: &mut [u8]) -> Result<(), Error> {
		ensure!(data.len() % BLOCK_SIZE == 0, Error::InvalidInputSize { len: data.len() });

		for offset in (0..data.len()).step_by(BLOCK_SIZE) {
			pseudo_encrypt_ecb_unchecked(&self.bytes, data, offset);
		}
		Ok(())
	}
}

impl AsRef<[u8]> for KeySchedule {
	fn as_ref(&self) -> &[u8] {
		&self.bytes
	}
}

impl std::fmt::Debug for KeySchedule {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("KeySchedule")
			.field("len", &self.bytes.len())
			.finish_non_exhaustive()
	}
}

/// Expands a 16, 24 or 32-byte key with the AES key schedule.
pub fn expand_key(key: &[u8]) -> Result<KeySchedule, Error> {
	ensure!(matches!(key.len(), 16 | 24 | 32), Error::InvalidKeySize { len: key.len() });

	let key_base = key.len() / ROUND_KEY_LENGTH;
	let mut expanded = vec![0u8; schedule_len(key.len())];
	expanded[..key.len()].copy_from_slice(key);

	let words = expanded.len() / ROUND_KEY_LENGTH;
	for i in key_base..words {
		let prev = (i - 1) * ROUND_KEY_LENGTH;
		let mut temp: [u8; COLUMN_LENGTH] = [
			expanded[prev],
			expanded[prev + 1],
			expanded[prev + 2],
			expanded[prev + 3],
		];

		if i % key_base == 0 {
			temp.rotate_left(1);
			temp = temp.map(sub_byte);
			temp[0] ^= RCON[i / key_base - 1];
		} else if key_base > 6 && i % key_base == 4 {
			temp = temp.map(sub_byte);
		}

		let back = (i - key_base) * ROUND_KEY_LENGTH;
		let at = i * ROUND_KEY_LENGTH;
		for j in 0..COLUMN_LENGTH {
			expanded[at + j] = expanded[back + j] ^ temp[j];
		}
	}

	Ok(KeySchedule { bytes: expanded })
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;
	use proptest::prelude::*;

	use super::*;
	use crate::pseudo_encrypt_ecb;

	fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
		prop_oneof![Just(16usize), Just(24), Just(32)]
			.prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
	}

	#[test]
	fn test_schedule_lengths() {
		assert_eq!(expand_key(&[0; 16]).unwrap().len(), 11 * BLOCK_SIZE);
		assert_eq!(expand_key(&[0; 24]).unwrap().len(), 13 * BLOCK_SIZE);
		assert_eq!(expand_key(&[0; 32]).unwrap().len(), 15 * BLOCK_SIZE);
	}

	#[test]
	fn test_first_round_key_is_the_key() {
		let key: [u8; 32] = std::array::from_fn(|i| i as u8);
		let schedule = expand_key(&key).unwrap();
		assert_eq!(&schedule.as_bytes()[..32], &key);

		let schedule = expand_key(&[0; 16]).unwrap();
		assert_eq!(schedule.round_key(0).unwrap(), &[0u8; 16]);
	}

	#[test]
	fn test_fips197_aes128_expansion() {
		let schedule = expand_key(&hex!("2b7e151628aed2a6abf7158809cf4f3c")).unwrap();
		assert_eq!(schedule.round_key(1).unwrap(), hex!("a0fafe1788542cb123a339392a6c7605"));
		assert_eq!(schedule.round_key(10).unwrap(), hex!("d014f9a8c9ee2589e13f0cc8b6630ca6"));
		assert!(schedule.round_key(11).is_none());
	}

	#[test]
	fn test_fips197_aes192_expansion() {
		let schedule =
			expand_key(&hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b")).unwrap();
		// w[6..8] and the final word w[51]
		assert_eq!(&schedule.as_bytes()[24..32], hex!("fe0c91f72402f5a5"));
		assert_eq!(&schedule.as_bytes()[204..208], hex!("01002202"));
	}

	#[test]
	fn test_fips197_aes256_expansion() {
		let schedule = expand_key(&hex!(
			"603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4"
		))
		.unwrap();
		// w[8], w[12] (SubWord-only step) and the final word w[59]
		assert_eq!(&schedule.as_bytes()[32..36], hex!("9ba35411"));
		assert_eq!(&schedule.as_bytes()[48..52], hex!("a8b09c1a"));
		assert_eq!(&schedule.as_bytes()[236..240], hex!("706c631e"));
	}

	#[test]
	fn test_invalid_key_sizes() {
		for len in [0, 1, 15, 17, 20, 31, 33, 64] {
			assert_eq!(expand_key(&vec![0; len]), Err(Error::InvalidKeySize { len }));
		}
	}

	#[test]
	fn test_pseudo_encrypt_blocks_rejects_partial_block() {
		let schedule = expand_key(&[7; 32]).unwrap();
		let mut data = [0u8; 40];
		assert_eq!(
			schedule.pseudo_encrypt_blocks(&mut data),
			Err(Error::InvalidInputSize { len: 40 })
		);
	}

	#[test]
	fn test_pseudo_encrypt_blocks_matches_single_blocks() {
		let schedule = expand_key(&[0x42; 32]).unwrap();
		let mut data: [u8; 128] = std::array::from_fn(|i| (i * 7) as u8);
		let mut expected = data;
		schedule.pseudo_encrypt_blocks(&mut data).unwrap();

		for chunk in expected.chunks_exact_mut(BLOCK_SIZE) {
			let block: &mut [u8; BLOCK_SIZE] = chunk.try_into().unwrap();
			schedule.pseudo_encrypt_block(block);
		}
		assert_eq!(data, expected);
	}

	proptest! {
		#[test]
		fn test_schedule_starts_with_key(key in key_strategy()) {
			let schedule = expand_key(&key).unwrap();
			prop_assert_eq!(schedule.len(), schedule_len(key.len()));
			prop_assert_eq!(&schedule.as_bytes()[..key.len()], &key[..]);
		}

		#[test]
		fn test_blocks_match_ecb_at_every_offset(
			key in key_strategy(),
			blocks in prop::collection::vec(any::<[u8; BLOCK_SIZE]>(), 0..8),
		) {
			let schedule = expand_key(&key).unwrap();
			let mut data = blocks.concat();
			let mut expected = data.clone();

			schedule.pseudo_encrypt_blocks(&mut data).unwrap();
			for offset in (0..expected.len()).step_by(BLOCK_SIZE) {
				pseudo_encrypt_ecb(schedule.as_bytes(), &mut expected, offset).unwrap();
			}
			prop_assert_eq!(data, expected);
		}
	}
}
