//! One-shot site provisioning.
//!
//! Creates the top-level entries the routing layer needs before any server
//! record means anything: the site's backend entry and a frontend entry
//! routing the site's hostname to it. Invoked explicitly with `--provision`;
//! the steady-state probe loop never calls this.

use tracing::info;

use crate::config::Settings;
use crate::registry::client::{EtcdClient, WriteError};
use crate::registry::keys::{backend_path, frontend_path, host_route, BackendEntry, FrontendEntry};

/// Write the site's backend and frontend entries.
pub async fn provision_site(client: &EtcdClient, settings: &Settings) -> Result<(), WriteError> {
    let backend = BackendEntry { kind: "http".into() };
    client.put(&backend_path(&settings.site_name), &backend).await?;
    info!(site = %settings.site_name, "backend entry provisioned");

    let frontend = FrontendEntry {
        kind: "http".into(),
        backend_id: settings.site_name.clone(),
        route: host_route(&settings.site_hostname),
    };
    client.put(&frontend_path(&settings.site_name), &frontend).await?;
    info!(
        site = %settings.site_name,
        hostname = %settings.site_hostname,
        "frontend entry provisioned"
    );

    Ok(())
}
