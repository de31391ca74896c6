//! Sidekick health-check agent library.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────────┐
//!                  │                   SIDEKICK                     │
//!                  │                                                │
//!   Backend        │  ┌─────────┐   ┌────────────┐   ┌──────────┐  │
//!   /health  ◀─────┼──│ health  │──▶│ membership │──▶│ registry │──┼────▶ etcd
//!   endpoint       │  │ probe   │   │  machine   │   │  client  │  │     keyspace
//!                  │  └─────────┘   └─────┬──────┘   └──────────┘  │
//!                  │                      │ next delay             │
//!                  │                      ▼                        │
//!                  │                ┌──────────┐   ┌────────────┐  │
//!                  │                │  agent   │   │ resilience │  │
//!                  │                │  loop    │◀──│  backoff   │  │
//!                  │                └──────────┘   └────────────┘  │
//!                  └────────────────────────────────────────────────┘
//! ```
//!
//! One probe cycle flows strictly left to right: the agent loop probes the
//! backend, feeds the outcome to the membership machine, performs at most one
//! etcd write, then sleeps for the delay the machine hands back. A healthy
//! backend is registered under vulcand's keyspace so the routing layer sends
//! it traffic; an unhealthy one is removed.

pub mod agent;
pub mod config;
pub mod health;
pub mod membership;
pub mod registry;
pub mod resilience;

pub use agent::Agent;
pub use config::Settings;
pub use registry::EtcdClient;
