// Copyright 2024-2025 Irreducible Inc.

//! Grøstl-256: a wide-pipe Merkle–Damgård hash built from two fixed 512-bit permutations.

mod compression;
mod hasher;
mod permutation;

pub use compression::GroestlCompression;
pub use hasher::{groestl256, Groestl256, Groestl256Core};
pub use permutation::{GroestlP, GroestlQ, State, ROUNDS, STATE_SIZE};
