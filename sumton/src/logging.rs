//! Diagnostic tracing for the sumton binary.
//!
//! Results go to stdout; everything emitted here goes to stderr so piping
//! `sumton` output stays clean regardless of the log level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var checked before `RUST_LOG`.
pub const LOG_ENV: &str = "SUMTON_LOG";

/// Directives used when neither env var holds a valid filter.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber.
///
/// Output: stderr, compact format, no targets (everything is `sumton`).
///
/// # Example
/// ```bash
/// SUMTON_LOG=sumton=debug sumton run -n 10
/// ```
pub fn init() {
    let filter = resolve_filter(
        std::env::var(LOG_ENV).ok().as_deref(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
    );

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

/// Pick the first directive string that parses: `SUMTON_LOG`, then
/// `RUST_LOG`, then [`DEFAULT_FILTER`].
fn resolve_filter(sumton_log: Option<&str>, rust_log: Option<&str>) -> EnvFilter {
    [sumton_log, rust_log]
        .into_iter()
        .flatten()
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
