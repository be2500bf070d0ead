//! Subscriber installation.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

use lumen_core::config::ObservabilityConfig;
use lumen_core::errors::{LumenError, LumenResult};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `config.log_level` when set. Fails if a global
/// subscriber is already installed or the filter directive is invalid.
pub fn init_tracing(config: &ObservabilityConfig) -> LumenResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| LumenError::Config {
            reason: format!("invalid log level {:?}: {e}", config.log_level),
        })?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| LumenError::Config {
        reason: format!("tracing subscriber already installed: {e}"),
    })
}
