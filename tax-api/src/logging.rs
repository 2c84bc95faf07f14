use std::io;

use tracing_subscriber::EnvFilter;

/// Builds the active filter.
///
/// `RUST_LOG` wins when set. Otherwise `fallback` is used, and if that does
/// not parse either, `info`.
pub fn make_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialise the tracing subscriber. Call once at startup.
///
/// * Writes to stderr so stdout carries only JSON envelopes.
/// * Strips timestamps and target names to keep CLI output clean.
/// * A second call is a no-op.
pub fn init_tracing(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(make_filter(fallback))
        .with_writer(io::stderr)
        .with_ansi(io::IsTerminal::is_terminal(&io::stderr()))
        .without_time()
        .with_target(false)
        .try_init();
}
