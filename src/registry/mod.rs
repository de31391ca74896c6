//! Registry subsystem: writes to vulcand's etcd keyspace.
//!
//! # Data Flow
//! ```text
//! Membership transition
//!     → keys.rs (key path + JSON payload)
//!     → client.rs (PUT/DELETE against etcd v2, one redirect hop)
//!     → Result<(), WriteError> back to the membership machine
//!
//! One-shot provisioning (--provision):
//!     provision.rs → backend entry + frontend entry → exit
//! ```
//!
//! # Design Decisions
//! - Only 5xx responses count as write failures (see client.rs)
//! - A redirect is followed exactly once, explicitly; the HTTP client itself
//!   never follows redirects
//! - Provisioning is a separate invocation, never part of the probe loop

pub mod client;
pub mod keys;
pub mod provision;

pub use client::{EtcdClient, WriteError};
pub use keys::ServerEntry;
