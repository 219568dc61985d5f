//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Name of the environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "COURSEREC_LOG";

const DEFAULT_FILTER: &str = "courserec=info";

/// Initialize the recommender tracing/logging system.
///
/// Reads `COURSEREC_LOG` for per-crate log levels, e.g.
/// `COURSEREC_LOG=courserec_engine=debug,courserec_core=warn`.
///
/// Falls back to `courserec=info` if `COURSEREC_LOG` is not set or is invalid.
/// Idempotent.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Initialize tracing with an explicit filter string, ignoring the environment.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        // Another subscriber may already be installed by an embedding
        // application; keep theirs.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}
