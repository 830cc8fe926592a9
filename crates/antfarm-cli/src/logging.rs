//! Structured logging setup.
//!
//! Logs always go to standard error so they never interleave with the
//! command replies on standard output. `RUST_LOG` wins over the configured
//! level when it is set.

use antfarm_core::config::LoggingConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if present and valid, else `config.level`.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global `tracing` subscriber.
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init(config: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(err) = installed {
        // Reaches whichever subscriber is already installed.
        debug!(%err, "Keeping the existing tracing subscriber");
    }
}
