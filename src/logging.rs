// Logging initialization.
//
// Uses `tracing` with `tracing-subscriber`. Output goes to stderr so it
// never mixes with the release listing on stdout. Everything below `warn`
// is hidden unless `RUST_LOG` says otherwise:
//
//     RUST_LOG=github_releases_cli=debug github release list

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "github_releases_cli=warn,github=warn,reqwest=error";

/// Install the global subscriber. Call once, before any command runs.
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
