//! Stats fetching subsystem.
//!
//! # Data Flow
//! ```text
//! poll loop tick
//!     → client.rs (GET endpoint.url, bounded by endpoint.timeout_secs)
//!     → status check (200 only)
//!     → full body as bytes → stats::parser
//! ```
//!
//! # Design Decisions
//! - No retries here; retry cadence belongs to the poll loop
//! - Every request has a deadline
//! - `StatsFetcher` is a trait so the loop can be driven by a fake

pub mod client;
pub mod types;

pub use client::{HttpStatsFetcher, StatsFetcher};
pub use types::{FetchError, FetchResult};
