//! Sidekick: a health-checking sidecar for vulcand-routed backends.
//!
//! Probes one backend's health endpoint and keeps its server record in
//! vulcand's etcd keyspace in sync, so the routing layer only forwards
//! traffic to a healthy instance.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sidekick::registry::provision::provision_site;
use sidekick::{Agent, EtcdClient, Settings};

#[tokio::main]
async fn main() -> ExitCode {
    let settings = match Settings::try_parse() {
        Ok(settings) => settings,
        // --help and --version land here too; only real parse failures
        // are errors.
        Err(e) if e.use_stderr() => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
        Err(e) => {
            print!("{e}");
            return ExitCode::SUCCESS;
        }
    };
    if let Err(e) = settings.validate() {
        eprintln!("{e}");
        return ExitCode::from(1);
    }

    // Initialize tracing subscriber; --debug raises the default filter.
    let default_filter = if settings.debug {
        "sidekick=debug"
    } else {
        "sidekick=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if settings.debug {
        tracing::debug!(?settings, "using settings");
    }

    if settings.provision {
        let client = match EtcdClient::new(&settings.etcd_address, &settings.prefix) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::from(1);
            }
        };
        return match provision_site(&client, &settings).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::from(1)
            }
        };
    }

    match Agent::new(settings) {
        Ok(agent) => agent.run().await,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    }

    // The agent loop never returns.
    ExitCode::SUCCESS
}
