// ABOUTME: Tracing subscriber setup for the CLI
// ABOUTME: RUST_LOG-driven filter, quiet by default, written to stderr

use tracing_subscriber::EnvFilter;

use sitepanel_config::constants::RUST_LOG;

const DEFAULT_FILTER: &str = "warn";

/// Filter from `RUST_LOG`, falling back to warnings only
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init_tracing() {
    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
