use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;

use crate::config::{LogFormat, LoggingConfig};

/// Build the event filter: `RUST_LOG` when set and valid, else the configured
/// level.
#[must_use]
pub fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global tracing subscriber (writing to stderr) and route `log`
/// records into it.
///
/// # Errors
/// Returns an error if a global subscriber or logger is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(build_env_filter(config));
    let installed = match config.format {
        LogFormat::Text => tracing::subscriber::set_global_default(
            registry.with(fmt::layer().with_target(true).with_writer(io::stderr)),
        ),
        LogFormat::Json => tracing::subscriber::set_global_default(
            registry.with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(io::stderr),
            ),
        ),
    };
    installed.context("failed to install tracing subscriber")?;
    tracing_log::LogTracer::init().context("failed to install log bridge")?;

    tracing::debug!(level = %config.level, format = ?config.format, "logging initialized");
    Ok(())
}
