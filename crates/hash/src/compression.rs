// Copyright 2024-2025 Irreducible Inc.

/// An `N`-to-1 compression function whose collision resistance is only claimed when its inputs
/// are chaining values, i.e. when it is iterated inside a hash construction.
pub trait PseudoCompressionFunction<T, const N: usize>: Clone {
	fn compress(&self, input: [T; N]) -> T;
}

/// An `N`-to-1 compression function that is collision-resistant on arbitrary inputs.
pub trait CompressionFunction<T, const N: usize>: PseudoCompressionFunction<T, N> {}
