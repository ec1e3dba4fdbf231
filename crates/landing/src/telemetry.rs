//! Tracing subscriber setup for native builds.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "billease_landing=info,billease_cli=info";

/// Set to `json` for one JSON object per event instead of plain text.
pub const LOG_FORMAT_VAR: &str = "BILLEASE_LOG_FORMAT";

/// Install a global `fmt` subscriber filtered by `RUST_LOG`, writing to
/// stderr.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let is_json = std::env::var(LOG_FORMAT_VAR).is_ok_and(|format| format == "json");
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init();
}
