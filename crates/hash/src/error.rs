// Copyright 2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("output length {len} is not supported by this function")]
	InvalidOutputLength { len: usize },
	#[error("{bit_len} message bits requested but only {available} bits were supplied")]
	InvalidInputSize { bit_len: u64, available: u64 },
	#[error("the message already ended on a partial byte, no further input can be absorbed")]
	MisalignedInput,
	#[error("Keccak-f[1600] supports 1 to 24 rounds, got {rounds}")]
	InvalidRoundCount { rounds: usize },
}
