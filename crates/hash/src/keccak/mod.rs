// Copyright 2025 Irreducible Inc.

//! The Keccak sponge over Keccak-f\[1600\], with the original (pre-SHA-3) `0x01` padding.

mod hasher;
mod permutation;
mod sponge;

pub use hasher::{Keccak256, Keccak256Core};
pub use permutation::{keccak_f, KeccakF1600, State, LANES, MAX_ROUNDS, STATE_BYTES};
pub use sponge::{keccak, keccak1600, keccak256, sponge, DIGEST_RATE, RAW_STATE_RATE};
