//! Configuration schema definitions.
//!
//! Sections derive Serde traits so partial configs fill in from defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endpoint of the reference deployment.
pub const DEFAULT_STATS_URL: &str = "http://srv.msk01.gigacorp.local/_stats";

/// Root configuration for the stats monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Statistics endpoint settings.
    pub endpoint: EndpointConfig,

    /// Poll loop timing and failure policy.
    pub polling: PollingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Statistics endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// URL serving the comma-separated stats line.
    pub url: String,

    /// Request timeout (connect + full body) in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_STATS_URL.to_string(),
            timeout_secs: 5,
            user_agent: concat!("stats-monitor/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Poll loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Delay between poll iterations in milliseconds.
    pub interval_ms: u64,

    /// Extra pause after a successful evaluation in milliseconds.
    pub evaluation_pause_ms: u64,

    /// Consecutive failures before "Unable to fetch server statistic" is reported.
    pub unavailable_threshold: u32,
}

impl PollingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn evaluation_pause(&self) -> Duration {
        Duration::from_millis(self.evaluation_pause_ms)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            evaluation_pause_ms: 20,
            unavailable_threshold: 3,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
