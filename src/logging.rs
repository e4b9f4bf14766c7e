//! Diagnostic logging shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber filtered by `RUST_LOG`, or by `fallback` when
/// that is unset or unparsable. Stdout is left to the demo transcript.
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // a subscriber may already be installed (tests); keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
