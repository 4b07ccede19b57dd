//! Consecutive fetch failure tracking.
//!
//! # State Transitions
//! ```text
//! count = 0 ──failure──▶ count + 1 ──(count == threshold)──▶ report once
//!     ▲                                                        │
//!     └──────────────────────── success ───────────────────────┘
//! ```
//!
//! Failures past the threshold keep counting but do not report again until
//! a success resets the streak.

/// Counter of consecutive fetch failures.
#[derive(Debug, Clone)]
pub struct FailureStreak {
    count: u32,
    threshold: u32,
}

impl FailureStreak {
    /// Create an empty streak that reports at `threshold` consecutive failures.
    pub fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold: threshold.max(1),
        }
    }

    /// Record a failure. Returns true exactly when this failure reaches the threshold.
    pub fn record_failure(&mut self) -> bool {
        self.count = self.count.saturating_add(1);
        self.count == self.threshold
    }

    /// Record a success. Returns the length of the streak that just ended.
    pub fn record_success(&mut self) -> u32 {
        std::mem::take(&mut self.count)
    }

    /// Current number of consecutive failures.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}
