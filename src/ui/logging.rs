//! ui::logging
//!
//! `tracing` subscriber setup for the binary.
//!
//! Events go to stderr. The default level is `warn`, `--debug` raises it
//! to `debug`, and `RUST_LOG` overrides both.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given debug flag.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "kube_secrets=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
