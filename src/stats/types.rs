//! Observation record, warning lines and parse errors.

use std::fmt;

use thiserror::Error;

/// Number of fields in one stats payload.
pub const FIELD_COUNT: usize = 7;

/// One observation of the remote host's resource counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerStats {
    pub load_average_percent: u64,
    pub mem_total_bytes: u64,
    pub mem_usage_bytes: u64,
    pub disk_total_bytes: u64,
    pub disk_usage_bytes: u64,
    pub bandwidth_total_bytes_per_sec: u64,
    pub bandwidth_usage_bytes_per_sec: u64,
}

/// A threshold violation. `Display` renders the exact output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// Load average above the limit.
    HighLoad { percent: u64 },
    /// Memory usage above the limit.
    HighMemory { used_percent: u64 },
    /// Disk almost full; free space in MiB.
    LowDiskSpace { free_mb: u64 },
    /// Link almost saturated; remaining capacity in MB/s.
    HighBandwidth { available_mbps: u64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::HighLoad { percent } => write!(f, "Load Average is too high: {}", percent),
            Warning::HighMemory { used_percent } => {
                write!(f, "Memory usage too high: {}%", used_percent)
            }
            Warning::LowDiskSpace { free_mb } => {
                write!(f, "Free disk space is too low: {} Mb left", free_mb)
            }
            Warning::HighBandwidth { available_mbps } => {
                write!(f, "Network bandwidth usage high: {} Mbit/s available", available_mbps)
            }
        }
    }
}

/// Errors produced while parsing a stats payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The payload did not split into exactly seven fields.
    #[error("unexpected response format: expected 7 fields, got {found}")]
    FieldCount { found: usize },
}
