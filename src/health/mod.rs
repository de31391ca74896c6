//! Health probing subsystem.
//!
//! # Data Flow
//! ```text
//! Agent cycle
//!     → probe.rs (single GET against the target)
//!     → ProbeOutcome { healthy, status }
//!     → membership machine
//! ```
//!
//! # Design Decisions
//! - Probing never fails: transport errors become `healthy = false`
//! - Healthy means exactly one thing: the response status is 2xx
//! - The status code is always carried along for logging

pub mod probe;

pub use probe::{probe, ProbeOutcome};
