// File: crates/demo/src/logging.rs
// Summary: Tracing setup for the CLI: stderr output filtered by RUST_LOG or a verbosity default.

use tracing_subscriber::{prelude::*, EnvFilter};

/// Default filter for a `-v` count: warn, info, debug, then trace.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Respects RUST_LOG, otherwise uses `default_filter`. Logs go to stderr so
/// documents written to stdout stay clean.
pub fn init_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false);
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init();
    tracing::debug!(filter = default_filter, "tracing initialized");
}
