//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Build fetcher → Build monitor
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast → poll loop exits after its current step
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Runtime errors never are; the poll loop absorbs them

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
