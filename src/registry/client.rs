//! Minimal etcd v2 write client.
//!
//! # Responsibilities
//! - PUT a JSON payload under the vulcand keyspace
//! - DELETE a key from the keyspace
//! - Follow one write redirect (etcd points non-leader writes at the leader)
//!
//! # Design Decisions
//! - The underlying HTTP client never follows redirects on its own; the
//!   single hop is an explicit resend, so a misbehaving store can never
//!   drag the agent into a redirect loop
//! - Only 5xx classifies as failure. A 4xx (e.g. a malformed key path)
//!   passes as success — the behavior the routing layer has always been
//!   deployed against, kept as-is rather than silently tightened
//! - The PUT body is the literal string `value=<json>`, unencoded, under a
//!   form-urlencoded content type; etcd v2 accepts it for these payloads

use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Response, StatusCode};
use serde::Serialize;
use thiserror::Error;

/// A write against the store that did not take effect.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("error talking to etcd: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("etcd unexpectedly returned HTTP {0}")]
    Store(StatusCode),
}

/// Write-only client for one etcd cluster and one keyspace prefix.
#[derive(Debug, Clone)]
pub struct EtcdClient {
    address: String,
    prefix: String,
    http: reqwest::Client,
}

impl EtcdClient {
    /// Create a client for `address` writing under `v2/keys/{prefix}`.
    pub fn new(address: &str, prefix: &str) -> Result<Self, WriteError> {
        let http = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()?;
        Ok(Self {
            address: address.trim_end_matches('/').to_string(),
            prefix: prefix.to_string(),
            http,
        })
    }

    /// Full URL for a key path like `/backends/shop/servers/web-1`.
    fn key_url(&self, path: &str) -> String {
        format!("{}/v2/keys/{}{}", self.address, self.prefix, path)
    }

    /// Write `value` at `path`, following at most one redirect.
    pub async fn put<T: Serialize>(&self, path: &str, value: &T) -> Result<(), WriteError> {
        let json = serde_json::to_string(value)?;
        let url = self.key_url(path);

        let mut response = self.send_put(&url, &json).await?;
        if response.status().is_redirection() {
            // Resend the identical write to the leader, once. A second
            // redirect is not followed; a redirect without a Location is
            // classified like any other final response.
            if let Some(location) = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
            {
                tracing::debug!(from = %url, to = %location, "etcd redirected write, resending once");
                response = self.send_put(&location, &json).await?;
            }
        }

        classify(response.status())
    }

    /// Remove the key at `path`.
    pub async fn delete(&self, path: &str) -> Result<(), WriteError> {
        let url = self.key_url(path);
        let response = self.http.delete(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, body, "etcd delete response");

        classify(status)
    }

    async fn send_put(&self, url: &str, json: &str) -> Result<Response, WriteError> {
        let response = self
            .http
            .put(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(format!("value={json}"))
            .send()
            .await?;
        tracing::debug!(%url, status = %response.status(), "etcd put response");
        Ok(response)
    }
}

/// 5xx is a failed write; everything else, 4xx included, is accepted.
fn classify(status: StatusCode) -> Result<(), WriteError> {
    if status.is_server_error() {
        Err(WriteError::Store(status))
    } else {
        Ok(())
    }
}
