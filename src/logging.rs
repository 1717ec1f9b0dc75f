//! Diagnostics on stderr, controlled by `RUST_LOG`.
//!
//! Stdout is reserved for solver output, which a judge compares byte for byte.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Defaults to `warn` if `RUST_LOG` is unset or unparsable.
///
/// ```bash
/// RUST_LOG=puzzles=trace puzzles solve fib-cipher <<< abcde
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
