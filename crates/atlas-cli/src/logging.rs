//! Console diagnostics. Logs go to stderr so stdout carries only the page.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::args::LogLevel;

/// Initialize the tracing subscriber; `RUST_LOG` overrides `level`.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
