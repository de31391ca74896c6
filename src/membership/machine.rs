//! Two-state membership machine driving registration.

use std::time::Duration;

use tracing::{info, warn};

use crate::health::ProbeOutcome;
use crate::resilience::next_delay;

/// Whether this agent currently believes its backend is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipState {
    OutOfService,
    InService,
}

/// The single store write a probe outcome can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Register,
    Deregister,
}

/// Membership state plus the retry delay it controls.
///
/// One probe cycle makes two calls: [`Membership::decide`] names the store
/// write the outcome requires (if any), the caller performs it, and
/// [`Membership::record`] folds the outcome back in and returns the next
/// sleep. The state only advances when the write was committed.
#[derive(Debug)]
pub struct Membership {
    state: MembershipState,
    retry_delay: Duration,
    base_interval: Duration,
    max_delay: Duration,
}

impl Membership {
    /// Start out of service with the delay at the base interval.
    pub fn new(base_interval: Duration, max_delay: Duration) -> Self {
        Self {
            state: MembershipState::OutOfService,
            retry_delay: base_interval,
            base_interval,
            max_delay,
        }
    }

    pub fn state(&self) -> MembershipState {
        self.state
    }

    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Which store write does this outcome require?
    pub fn decide(&self, probe: &ProbeOutcome) -> Option<StoreAction> {
        match (self.state, probe.healthy) {
            (MembershipState::OutOfService, true) => Some(StoreAction::Register),
            (MembershipState::InService, false) => Some(StoreAction::Deregister),
            _ => None,
        }
    }

    /// Fold the cycle's outcome back in; returns the next sleep.
    ///
    /// `committed` is true when the write decided for this cycle succeeded,
    /// or when no write was needed. On a failed write the state stays put
    /// and the transition is retried on the next qualifying probe.
    pub fn record(&mut self, probe: &ProbeOutcome, committed: bool) -> Duration {
        if probe.healthy {
            match self.state {
                MembershipState::OutOfService if committed => {
                    self.state = MembershipState::InService;
                    self.retry_delay = self.base_interval;
                    info!("target is healthy, added to rotation");
                }
                MembershipState::OutOfService => {
                    warn!("registration failed, target stays out of rotation");
                }
                MembershipState::InService => {}
            }
        } else {
            self.retry_delay = next_delay(self.retry_delay, self.max_delay);
            match self.state {
                MembershipState::InService if committed => {
                    self.state = MembershipState::OutOfService;
                    info!("target is unhealthy, removed from rotation");
                }
                MembershipState::InService => {
                    warn!("deregistration failed, stale record remains in the store");
                }
                MembershipState::OutOfService => {}
            }
        }
        self.retry_delay
    }
}
