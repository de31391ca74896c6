//! Single-shot HTTP health probe.

use reqwest::StatusCode;

/// Result of one health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Whether the target answered with a 2xx status.
    pub healthy: bool,
    /// Status code of the response, absent on transport failure.
    pub status: Option<StatusCode>,
}

impl ProbeOutcome {
    pub fn healthy(status: StatusCode) -> Self {
        Self { healthy: true, status: Some(status) }
    }

    pub fn unhealthy(status: Option<StatusCode>) -> Self {
        Self { healthy: false, status }
    }
}

/// Probe the target once.
///
/// Uses the client's default transport settings; no explicit timeout is
/// configured. A connection or DNS failure is reported as unhealthy, never
/// as an error: probing only observes, it does not fail.
pub async fn probe(client: &reqwest::Client, target: &str) -> ProbeOutcome {
    match client.get(target).send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                ProbeOutcome::healthy(status)
            } else {
                ProbeOutcome::unhealthy(Some(status))
            }
        }
        Err(e) => {
            tracing::warn!(target, error = %e, "health check transport failure");
            ProbeOutcome::unhealthy(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_classifies_status_classes() {
        assert!(ProbeOutcome::healthy(StatusCode::OK).healthy);
        assert!(!ProbeOutcome::unhealthy(Some(StatusCode::NOT_FOUND)).healthy);
        assert!(!ProbeOutcome::unhealthy(Some(StatusCode::BAD_GATEWAY)).healthy);
        assert_eq!(ProbeOutcome::unhealthy(None).status, None);
    }
}
