//! Key paths and payloads for vulcand's etcd keyspace.
//!
//! Field casing matters: vulcand reads `URL`, `Type`, `BackendId` and
//! `Route` verbatim, so every payload pins its serialized names.

use serde::Serialize;

/// One running instance of a backend, keyed by its reachable URL.
#[derive(Debug, Clone, Serialize)]
pub struct ServerEntry {
    #[serde(rename = "URL")]
    pub url: String,
}

/// Top-level backend entry, created once by provisioning.
#[derive(Debug, Clone, Serialize)]
pub struct BackendEntry {
    #[serde(rename = "Type")]
    pub kind: String,
}

/// Frontend entry routing a hostname to a backend, created by provisioning.
#[derive(Debug, Clone, Serialize)]
pub struct FrontendEntry {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "BackendId")]
    pub backend_id: String,
    #[serde(rename = "Route")]
    pub route: String,
}

/// Key for a backend instance: `/backends/{site}/servers/{backend}`.
pub fn server_path(site: &str, backend: &str) -> String {
    format!("/backends/{site}/servers/{backend}")
}

/// Key for the site's backend entry: `/backends/{site}/backend`.
pub fn backend_path(site: &str) -> String {
    format!("/backends/{site}/backend")
}

/// Key for the site's frontend entry: `/frontends/{site}/frontend`.
pub fn frontend_path(site: &str) -> String {
    format!("/frontends/{site}/frontend")
}

/// Route expression matching every path on the site's hostname.
pub fn host_route(hostname: &str) -> String {
    format!("Host('{hostname}') && PathRegexp('/.*')")
}
