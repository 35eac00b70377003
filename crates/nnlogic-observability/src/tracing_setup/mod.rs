//! Tracing setup: structured logging with operator span names.

pub mod spans;

use std::sync::Once;

use nnlogic_core::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted before `ObservabilityConfig::log_level`.
pub const LOG_ENV_VAR: &str = "NNLOGIC_LOG";

static INIT: Once = Once::new();

/// Install the global `fmt` subscriber.
///
/// `NNLOGIC_LOG` takes precedence over the configured level. Output is JSON
/// when `json_logs` is set. Idempotent; if the host already installed a
/// subscriber, that one is kept.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

        let installed = if config.json_logs {
            builder.json().try_init()
        } else {
            builder.try_init()
        };

        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
