//! Diagnostic logging to stderr.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the stderr log subscriber.
///
/// Reads the `RUST_LOG` filter and falls back to `warn`. Records emitted
/// through the `log` facade by the library crates are forwarded as well.
/// Calling this more than once has no further effect.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        // Ignore failure if the embedding program already installed a subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    });
}
