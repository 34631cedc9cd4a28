//! Tracing initialization shared by the retrieval and decision crates.
//!
//! Logs are structured JSON, matching what the complaint platform's log
//! collector ingests.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber with JSON output.
///
/// Reads the `MINWON_LOG` environment variable for per-subsystem levels,
/// e.g. `MINWON_LOG=minwon_retrieval=debug,minwon_decision=info`. Falls
/// back to `info` when unset or invalid.
///
/// Idempotent: only the first call in a process installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("MINWON_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
        install(filter);
    });
}

/// Initialize with an explicit filter directive, ignoring `MINWON_LOG`.
///
/// Shares the same guard as [`init_tracing`]: whichever runs first wins.
pub fn init_tracing_with_filter(directive: &str) {
    INIT.call_once(|| {
        install(EnvFilter::new(directive));
    });
}

fn install(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();
}
