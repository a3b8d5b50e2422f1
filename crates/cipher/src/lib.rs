// Copyright 2025 Irreducible Inc.

//! Reduced AES-style block transform used as a mixing primitive.
//!
//! This is *not* AES. There is no initial key whitening and every one of the ten rounds applies
//! `MixColumns`, so the output is incompatible with any standard AES mode. The key schedule is
//! the standard AES one.

mod error;
mod key_schedule;
mod round;

pub use error::*;
pub use key_schedule::*;
pub use round::*;
