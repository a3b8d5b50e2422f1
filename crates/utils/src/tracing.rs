// Copyright 2023-2025 Irreducible Inc.

use crate::env::boolean_env_flag_set;

/// Environment flag that turns on span close events (with busy/idle timings) in the log output.
pub const TRACE_SPANS_ENV: &str = "CNHASH_TRACE_SPANS";

/// Installs a global `tracing` subscriber filtered by `RUST_LOG`.
///
/// Calling this more than once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing() {
	use tracing_subscriber::{
		fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
	};

	let span_events = if boolean_env_flag_set(TRACE_SPANS_ENV) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(EnvFilter::from_default_env())
		.with(tracing_subscriber::fmt::layer().with_span_events(span_events))
		.try_init();
}
