//! Remote server statistics monitor library.

pub mod config;
pub mod fetch;
pub mod lifecycle;
pub mod monitor;
pub mod observability;
pub mod stats;

pub use config::MonitorConfig;
pub use lifecycle::Shutdown;
pub use monitor::StatsMonitor;
