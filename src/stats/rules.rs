//! Threshold rules.
//!
//! Rules fire independently and are reported in this order: load, memory,
//! disk, bandwidth.

use crate::stats::types::{ServerStats, Warning};

/// Load average above this percentage is reported.
pub const LOAD_AVERAGE_LIMIT: u64 = 30;
/// Memory usage above this percentage is reported.
pub const MEMORY_USAGE_LIMIT_PERCENT: u64 = 80;
/// Disk usage above this percentage is reported.
pub const DISK_USAGE_LIMIT_PERCENT: u64 = 90;
/// Bandwidth usage above this percentage is reported.
pub const BANDWIDTH_USAGE_LIMIT_PERCENT: u64 = 90;

const BYTES_PER_MIB: u64 = 1024 * 1024;
const BYTES_PER_MB: u64 = 1000 * 1000;

/// Evaluate one observation against the threshold policy.
pub fn evaluate(stats: &ServerStats) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if stats.load_average_percent > LOAD_AVERAGE_LIMIT {
        warnings.push(Warning::HighLoad {
            percent: stats.load_average_percent,
        });
    }

    let memory = used_percent("memory", stats.mem_usage_bytes, stats.mem_total_bytes);
    if let Some(used_percent) = memory {
        if used_percent > MEMORY_USAGE_LIMIT_PERCENT {
            warnings.push(Warning::HighMemory { used_percent });
        }
    }

    let disk = used_percent("disk", stats.disk_usage_bytes, stats.disk_total_bytes);
    if let Some(used_percent) = disk {
        if used_percent > DISK_USAGE_LIMIT_PERCENT {
            let free = stats.disk_total_bytes.saturating_sub(stats.disk_usage_bytes);
            warnings.push(Warning::LowDiskSpace {
                free_mb: free / BYTES_PER_MIB,
            });
        }
    }

    if let Some(used_percent) = used_percent(
        "bandwidth",
        stats.bandwidth_usage_bytes_per_sec,
        stats.bandwidth_total_bytes_per_sec,
    ) {
        if used_percent > BANDWIDTH_USAGE_LIMIT_PERCENT {
            let free = stats
                .bandwidth_total_bytes_per_sec
                .saturating_sub(stats.bandwidth_usage_bytes_per_sec);
            warnings.push(Warning::HighBandwidth {
                available_mbps: free / BYTES_PER_MB,
            });
        }
    }

    warnings
}

/// Truncated `usage * 100 / total`, or `None` when there is no capacity to divide by.
fn used_percent(metric: &'static str, usage: u64, total: u64) -> Option<u64> {
    if total == 0 {
        tracing::debug!(metric, "Total is zero, skipping rule");
        return None;
    }
    let percent = u128::from(usage) * 100 / u128::from(total);
    Some(u64::try_from(percent).unwrap_or(u64::MAX))
}
