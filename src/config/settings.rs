//! Startup settings parsed from command-line flags.

use clap::Parser;
use thiserror::Error;
use url::Url;

/// Immutable agent configuration, supplied once at startup.
#[derive(Debug, Clone, Parser)]
#[command(name = "sidekick")]
#[command(about = "Health-checking sidecar that registers a backend with vulcand via etcd", long_about = None)]
pub struct Settings {
    /// Output debug info and log all attempted health checks.
    #[arg(long)]
    pub debug: bool,

    /// Prefix of the etcd keyspace used by vulcand.
    #[arg(long, default_value = "vulcand")]
    pub prefix: String,

    /// Label used to identify the site's backends and frontends.
    #[arg(long, default_value = "")]
    pub site_name: String,

    /// Hostname of the site this backend serves (used by --provision).
    #[arg(long, default_value = "")]
    pub site_hostname: String,

    /// Identifier used for this instance of the backend app.
    #[arg(long, default_value = "")]
    pub backend_name: String,

    /// How often to trigger the health check, in seconds.
    #[arg(long, default_value_t = 30)]
    pub interval: u64,

    /// Address of the backend to be health checked.
    #[arg(long, default_value = "")]
    pub target_address: String,

    /// Address of the etcd cluster.
    #[arg(long, default_value = "http://localhost:4001")]
    pub etcd_address: String,

    /// Provision the site's backend and frontend entries in etcd, then exit.
    #[arg(long)]
    pub provision: bool,
}

/// Semantic validation failure; always fatal.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("target-address is required")]
    MissingTargetAddress,
    #[error("target-address is not a valid URL: {0}")]
    BadTargetAddress(url::ParseError),
    #[error("etcd-address is not a valid URL: {0}")]
    BadEtcdAddress(url::ParseError),
}

impl Settings {
    /// Semantic checks clap cannot express. Pure; runs once after parsing.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.target_address.is_empty() {
            return Err(SettingsError::MissingTargetAddress);
        }
        Url::parse(&self.target_address).map_err(SettingsError::BadTargetAddress)?;
        Url::parse(&self.etcd_address).map_err(SettingsError::BadEtcdAddress)?;
        Ok(())
    }
}
