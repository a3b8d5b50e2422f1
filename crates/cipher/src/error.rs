// Copyright 2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("key length {len} is not supported (expected 16, 24 or 32 bytes)")]
	InvalidKeySize { len: usize },
	#[error("slice of {len} bytes cannot hold {required} bytes at offset {offset}")]
	InvalidBlockSize {
		len: usize,
		offset: usize,
		required: usize,
	},
	#[error("input length {len} is not a multiple of the 16-byte block size")]
	InvalidInputSize { len: usize },
}
