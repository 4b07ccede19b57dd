//! Remote server statistics monitor.
//!
//! # Architecture Overview
//!
//! ```text
//!   timer ──▶ fetch (GET /_stats) ──▶ stats::parser ──▶ stats::rules ──▶ stdout
//!                   │                       │
//!                   └──── failure ──────────┴──▶ failure streak ──(3rd)──▶ stdout
//!
//!   cross-cutting: config · lifecycle (startup/shutdown/signals) · observability
//! ```

use stats_monitor::config::MonitorConfig;
use stats_monitor::lifecycle::{startup, Shutdown};
use stats_monitor::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = MonitorConfig::default();

    observability::init_logging(&config.observability);

    tracing::info!("stats-monitor v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        url = %config.endpoint.url,
        interval_ms = config.polling.interval_ms,
        timeout_secs = config.endpoint.timeout_secs,
        "Configuration loaded"
    );

    let monitor = startup::build_monitor(&config, std::io::stdout())?;

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    shutdown.trigger_on_signal().await?;
    handle.await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
