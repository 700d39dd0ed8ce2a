pub mod build_info;

use tracing_subscriber::{fmt, EnvFilter};

/// Directive used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "expense_core=warn";

/// Installs the global tracing subscriber, logging to stderr so the console
/// output stays clean. Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
