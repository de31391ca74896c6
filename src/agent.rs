//! The steady-state control loop.
//!
//! # Responsibilities
//! - Probe the target once per cycle
//! - Perform the single store write the membership machine asks for
//! - Sleep for the delay the machine hands back
//!
//! # Design Decisions
//! - One task, one cycle at a time; the sleep is the only suspension point
//! - No shutdown path: the loop runs until the process is killed
//! - Store failures never stop the loop, they only delay the transition

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::health::probe;
use crate::membership::{Membership, StoreAction};
use crate::registry::keys::server_path;
use crate::registry::{EtcdClient, ServerEntry, WriteError};

/// Cap on the retry delay while the target stays unhealthy.
pub const MAX_BACKOFF: Duration = Duration::from_secs(300);

/// Sidecar agent owning the probe loop for one backend instance.
pub struct Agent {
    settings: Settings,
    probe_client: reqwest::Client,
    registry: EtcdClient,
    membership: Membership,
    server_key: String,
}

impl Agent {
    pub fn new(settings: Settings) -> Result<Self, WriteError> {
        let registry = EtcdClient::new(&settings.etcd_address, &settings.prefix)?;
        let server_key = server_path(&settings.site_name, &settings.backend_name);
        let membership = Membership::new(Duration::from_secs(settings.interval), MAX_BACKOFF);
        Ok(Self {
            probe_client: reqwest::Client::new(),
            registry,
            membership,
            server_key,
            settings,
        })
    }

    /// Run the probe loop. Never returns; termination is external.
    pub async fn run(mut self) {
        info!(
            target = %self.settings.target_address,
            etcd = %self.settings.etcd_address,
            key = %self.server_key,
            interval_secs = self.settings.interval,
            "sidekick agent starting"
        );
        loop {
            let sleep = self.cycle().await;
            tokio::time::sleep(sleep).await;
        }
    }

    /// One probe cycle: probe, write, record. Returns the next sleep.
    async fn cycle(&mut self) -> Duration {
        let outcome = probe(&self.probe_client, &self.settings.target_address).await;

        let committed = match self.membership.decide(&outcome) {
            Some(StoreAction::Register) => {
                let entry = ServerEntry {
                    url: self.settings.target_address.clone(),
                };
                match self.registry.put(&self.server_key, &entry).await {
                    Ok(()) => true,
                    Err(e) => {
                        error!(key = %self.server_key, error = %e, "failed to register backend instance");
                        false
                    }
                }
            }
            Some(StoreAction::Deregister) => match self.registry.delete(&self.server_key).await {
                Ok(()) => true,
                Err(e) => {
                    error!(key = %self.server_key, error = %e, "failed to deregister backend instance");
                    false
                }
            },
            None => true,
        };

        let sleep = self.membership.record(&outcome, committed);

        if outcome.healthy {
            debug!(
                target = %self.settings.target_address,
                status = ?outcome.status,
                next_check = ?sleep,
                "healthy"
            );
        } else {
            warn!(
                target = %self.settings.target_address,
                status = ?outcome.status,
                backoff = ?sleep,
                "failure, backing off"
            );
        }

        sleep
    }
}
