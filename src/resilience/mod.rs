//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Unhealthy probe result
//!     → backoff.rs (double the previous delay, capped)
//!     → next sleep for the agent loop
//! ```
//!
//! # Design Decisions
//! - Backoff is a pure function: same inputs, same delay, always
//! - No jitter: the schedule must be reproducible in tests
//! - The cap keeps a long outage from pushing checks out indefinitely

pub mod backoff;

pub use backoff::next_delay;
