//! Tracing initialization
//!
//! Logs go to stderr so stdout stays free for the word/feedback exchange.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `WORDLE_LOG=wordle_filter=debug`
pub const LOG_ENV: &str = "WORDLE_LOG";

static INIT: Once = Once::new();

/// Initialize logging once; later calls are no-ops
///
/// Reads the filter from `WORDLE_LOG`. Falls back to `warn`, or `debug` when
/// `verbose` is set.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .init();
    });
}
