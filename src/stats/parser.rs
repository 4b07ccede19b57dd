//! Wire format parsing.
//!
//! The payload is a single line: load, mem total, mem usage, disk total,
//! disk usage, bandwidth total, bandwidth usage.

use std::str::FromStr;

use crate::stats::types::{ParseError, ServerStats, FIELD_COUNT};

const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "load_average_percent",
    "mem_total_bytes",
    "mem_usage_bytes",
    "disk_total_bytes",
    "disk_usage_bytes",
    "bandwidth_total_bytes_per_sec",
    "bandwidth_usage_bytes_per_sec",
];

/// Parse a raw response body into a [`ServerStats`].
pub fn parse_stats(raw: &[u8]) -> Result<ServerStats, ParseError> {
    String::from_utf8_lossy(raw).parse()
}

impl FromStr for ServerStats {
    type Err = ParseError;

    fn from_str(payload: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = payload.trim().split(',').collect();
        if parts.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount { found: parts.len() });
        }

        let mut values = [0u64; FIELD_COUNT];
        for (i, part) in parts.iter().enumerate() {
            values[i] = parse_field(FIELD_NAMES[i], part);
        }

        Ok(ServerStats {
            load_average_percent: values[0],
            mem_total_bytes: values[1],
            mem_usage_bytes: values[2],
            disk_total_bytes: values[3],
            disk_usage_bytes: values[4],
            bandwidth_total_bytes_per_sec: values[5],
            bandwidth_usage_bytes_per_sec: values[6],
        })
    }
}

/// Unparseable fields read as zero.
fn parse_field(name: &str, raw: &str) -> u64 {
    let trimmed = raw.trim();
    match trimmed.parse::<u64>() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                field = name,
                value = %trimmed,
                error = %e,
                "Invalid stats field, using 0"
            );
            0
        }
    }
}
