//! Diagnostic logging.
//!
//! Library code emits `tracing` events; this installs a stderr subscriber
//! whose level follows `--verbose` / `--quiet`. `RUST_LOG` takes precedence.

use std::io::IsTerminal;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
pub fn setup(verbosity: u8, quiet: bool) {
    let directive = match (quiet, verbosity) {
        (true, _) => "off",
        (false, 0) => "rivendor=warn",
        (false, 1) => "rivendor=debug",
        (false, _) => "rivendor=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    // Fails only if a subscriber is already installed (e.g., in tests).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init();
}
