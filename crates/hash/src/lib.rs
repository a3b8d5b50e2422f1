// Copyright 2023-2025 Irreducible Inc.

//! The 256-bit hash functions of a CryptoNight-style proof-of-work scheme: BLAKE-256,
//! Grøstl-256, JH-256 and the Keccak sponge.

mod algorithm;
pub mod blake;
pub mod compression;
mod error;
pub mod groestl;
pub mod jh;
pub mod keccak;
pub mod parallel;
pub mod permutation;

pub use algorithm::HashAlgorithm;
pub use blake::{blake256, Blake256};
pub use compression::*;
pub use error::Error;
pub use groestl::{groestl256, Groestl256};
pub use jh::{jh256, Jh256};
pub use keccak::{keccak, keccak1600, keccak256, sponge, Keccak256};
pub use permutation::*;
