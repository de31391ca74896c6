//! Membership state machine.
//!
//! # State Transitions
//! ```text
//! OutOfService --healthy--> register; on success: InService, delay = base
//! OutOfService --unhealthy--> stay; delay = next_delay(delay, max)
//! InService    --healthy--> stay; delay unchanged
//! InService    --unhealthy--> deregister; on success: OutOfService;
//!                             delay = next_delay(delay, max)
//! ```
//!
//! # Design Decisions
//! - A store write happens exactly once per transition, never per probe
//! - A failed write leaves the state where it was; the transition is
//!   retried on the next qualifying probe, not immediately
//! - Deciding and recording are separate steps so the store write sits
//!   between them as an explicit, observable outcome

pub mod machine;

pub use machine::{Membership, MembershipState, StoreAction};
