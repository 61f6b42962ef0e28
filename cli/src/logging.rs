#![deny(missing_docs)]

//! # Logging
//!
//! Installs the `tracing` subscriber. Logs go to stderr so stdout only ever
//! carries the JSON output.

use crate::error::{CliError, CliResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_LEVEL: &str = "warn";

/// Builds the filter: `RUST_LOG` first, then `debug` or the default level.
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { DEFAULT_LEVEL })
    })
}

/// Initializes the global subscriber.
pub fn init_logging(verbose: bool) -> CliResult<()> {
    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| CliError::General(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_builds() {
        let filter = build_filter(true);
        assert!(!format!("{}", filter).is_empty());
    }
}
