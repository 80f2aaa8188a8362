//! Tracing subscriber setup. Logs always go to stderr.

use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber; `RUST_LOG` overrides the default filter.
pub fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber may already be installed (tests); keep it.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
