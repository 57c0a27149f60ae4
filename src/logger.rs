use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the process-wide tracing subscriber. Safe to call more than once.
pub fn init_logging() {

    LOGGER_INITIALIZED.get_or_init(|| {

        // RUST_LOG wins, otherwise log everything at info and above
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // don't panic if a subscriber was already set (e.g. by a test harness)
        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .is_err()
        {
            tracing::debug!("Global tracing subscriber already set, keeping it");
        }

    });

}
