//! Diagnostic logging for the binary.
//!
//! User-facing messages go through `cli::output`; this is the `tracing`
//! side channel for troubleshooting. Only errors are shown unless
//! `PWVAULT_LOG` says otherwise, e.g. `PWVAULT_LOG=debug pwvault list`.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "PWVAULT_LOG";

/// Install the global subscriber, writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
