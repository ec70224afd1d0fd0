//! Logging bootstrap for the client binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber. The `RUST_LOG` environment
/// variable controls filtering; the default keeps session internals at debug
/// while quieting dependencies.
pub fn setup_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,runtime=debug,scene=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize logging: {error}"))?;

    Ok(())
}
