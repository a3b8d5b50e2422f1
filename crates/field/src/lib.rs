// Copyright 2023-2025 Irreducible Inc.

//! Arithmetic in the AES field GF(2^8) = GF(2)[x] / (x^8 + x^4 + x^3 + x + 1).
//!
//! Everything here is computed at compile time; the tables are immutable statics that any
//! number of threads may read concurrently.

mod aes_field;

pub use aes_field::*;
