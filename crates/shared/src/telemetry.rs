//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.filter`. Returns `false` when a
/// global subscriber was already installed, in which case nothing changes.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter.as_str()));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .is_ok()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .is_ok()
    }
}
