// Copyright 2024-2025 Irreducible Inc.

use std::{env, sync::OnceLock};

/// Configures the global rayon pool used by the batch hashing APIs.
///
/// When `RAYON_NUM_THREADS` is `1` the pool is built with `use_current_thread`, so batch hashing
/// runs inline on the caller's thread and profiles stay readable.
///
/// NOTE: rayon allows the global pool to be built only once. Call this at the start of `main`
/// (or of a benchmark) before any parallel work happens. The result is returned by reference
/// because `ThreadPoolBuildError` doesn't implement `Clone`.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| match env::var("RAYON_NUM_THREADS") {
		Ok(v) if v == "1" => rayon::ThreadPoolBuilder::new()
			.num_threads(1)
			.use_current_thread()
			.build_global(),
		_ => Ok(()),
	})
}
