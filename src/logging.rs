//! Logging setup for the calcbrain binary.
//!
//! The REPL prints its display lines on stdout, so diagnostics (ignored
//! keys, resolved operations, clipboard failures) are sent to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// Quiet by default (`warn`): only failed clipboard copies and rejected keys
/// show up. `RUST_LOG=calcbrain=debug` also reports unknown symbols and
/// operators pressed without an operand; `trace` adds every resolved
/// pending operation.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
