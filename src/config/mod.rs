//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! MonitorConfig::default() (built in code, no config file)
//!     → validation.rs (semantic checks at startup)
//!     → sections handed to the fetcher, the poll loop and logging
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built
//! - All fields have defaults; the binary runs on defaults alone
//! - Thresholds are fixed in `stats::rules`, not configurable
//! - Validation reports every problem, not just the first

pub mod schema;
pub mod validation;

pub use schema::{EndpointConfig, MonitorConfig, ObservabilityConfig, PollingConfig};
