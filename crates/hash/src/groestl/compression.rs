// Copyright 2024-2025 Irreducible Inc.

use super::permutation::{p, q, State};
use crate::compression::{CompressionFunction, PseudoCompressionFunction};

/// `h <- P(h ^ m) ^ Q(m) ^ h`.
#[inline]
pub(super) fn compress(h: &mut State, m: &[u8]) {
	let mut hm = *h;
	let mut mq = [0u8; 64];
	mq.copy_from_slice(m);
	for (x, y) in hm.iter_mut().zip(&mq) {
		*x ^= y;
	}
	p(&mut hm);
	q(&mut mq);
	for ((h, x), y) in h.iter_mut().zip(&hm).zip(&mq) {
		*h ^= x ^ y;
	}
}

/// The Grøstl-256 compression function `C(h, m) = P(h ^ m) ^ Q(m) ^ h` on 64-byte values.
#[derive(Debug, Default, Clone, Copy)]
pub struct GroestlCompression;

impl PseudoCompressionFunction<State, 2> for GroestlCompression {
	fn compress(&self, [h, m]: [State; 2]) -> State {
		let mut out = h;
		compress(&mut out, &m);
		out
	}
}

impl CompressionFunction<State, 2> for GroestlCompression {}
