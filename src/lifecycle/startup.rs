//! Startup orchestration.
//!
//! Validates the configuration and wires the HTTP fetcher into a monitor
//! writing to the given sink.

use std::io::Write;

use thiserror::Error;

use crate::config::validation::{describe, validate_config, ValidationError};
use crate::config::MonitorConfig;
use crate::fetch::{FetchError, HttpStatsFetcher};
use crate::monitor::StatsMonitor;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", describe(.0))]
    Config(Vec<ValidationError>),

    #[error(transparent)]
    Fetcher(#[from] FetchError),
}

/// Build a monitor polling the configured endpoint.
pub fn build_monitor<W>(
    config: &MonitorConfig,
    sink: W,
) -> Result<StatsMonitor<HttpStatsFetcher, W>, StartupError>
where
    W: Write + Send,
{
    validate_config(config).map_err(StartupError::Config)?;

    let fetcher = HttpStatsFetcher::new(&config.endpoint)?;
    tracing::info!(
        url = %fetcher.url(),
        timeout_secs = config.endpoint.timeout_secs,
        "Stats fetcher ready"
    );

    Ok(StatsMonitor::new(fetcher, sink, config.polling.clone()))
}
