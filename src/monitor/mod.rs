//! Poll loop subsystem.
//!
//! # Data Flow
//! ```text
//! Periodic timer
//!     → fetch::StatsFetcher::fetch
//!     → stats::parse_stats → stats::evaluate
//!     → warning lines written to the sink
//!
//! On fetch or parse failure:
//!     → streak.rs records the failure
//!     → one "Unable to fetch server statistic" line when the streak hits the threshold
//! ```
//!
//! # Design Decisions
//! - Single task, sequential fetch → parse → evaluate → report
//! - The failure streak is owned by the loop, not shared
//! - Individual failures are logged, never written to the sink
//! - Shutdown is observed both mid-poll and mid-sleep

pub mod poller;
pub mod streak;

pub use poller::{PollError, PollOutcome, StatsMonitor, UNAVAILABLE_MESSAGE};
pub use streak::FailureStreak;
