//! Statistics evaluation subsystem.
//!
//! # Data Flow
//! ```text
//! raw body bytes
//!     → parser.rs (7 comma-separated integers → ServerStats)
//!     → rules.rs (fixed thresholds → Vec<Warning>)
//!     → poll loop writes each Warning as one line to the sink
//! ```
//!
//! # Design Decisions
//! - Parsing is all-or-nothing: a wrong field count never yields a record
//! - A field that is not an integer reads as zero and is logged
//! - Evaluation is a pure function of one observation
//! - Zero totals skip their rule instead of dividing by zero

pub mod parser;
pub mod rules;
pub mod types;

pub use parser::parse_stats;
pub use rules::evaluate;
pub use types::{ParseError, ServerStats, Warning};
