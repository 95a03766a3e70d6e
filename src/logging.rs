//! Tracing setup for the submitter binaries

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the stdout tracing subscriber
///
/// `RUST_LOG` overrides the default filter when set.
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Initialize tracing with an explicit base level (e.g. from a CLI flag)
pub fn init_tracing_with_level(log_level: Option<&str>) {
    let base_level = log_level.unwrap_or("info");
    let default_filter = format!("prompt_submitter={base_level},reqwest=warn");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
