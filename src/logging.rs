//! Logging setup for the binary. The library only emits `tracing` events.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. `RUST_LOG` wins when set; otherwise
/// `warn`, or `debug` with `verbose`.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
