//! Pre-mount reachability check.
//!
//! Purely informational: the outcome is logged and returned, and the shell
//! mounts the viewer whatever it says.

use owo_colors::OwoColorize;
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Default time allowed for the probe request.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// What the probe saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered, with any status
    Reachable { status: StatusCode, latency: Duration },
    /// No HTTP answer (DNS, TLS, connect, timeout)
    Unreachable { reason: String },
}

impl ProbeOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable { .. })
    }
}

/// Sends one GET to `url` and reports how it went.
pub async fn probe(url: &str, timeout: Duration) -> ProbeOutcome {
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            return ProbeOutcome::Unreachable {
                reason: e.to_string(),
            };
        }
    };

    info!("→ {} {}", "PROBE".yellow(), url);
    let start = Instant::now();

    match client.get(url).send().await {
        Ok(response) => {
            let latency = start.elapsed();
            let status = response.status();
            info!(
                "← {} {} ({}ms)",
                "PROBE".yellow(),
                status,
                latency.as_millis()
            );
            ProbeOutcome::Reachable { status, latency }
        }
        Err(e) => {
            warn!(
                "← {} unreachable after {}ms: {}",
                "PROBE".yellow(),
                start.elapsed().as_millis(),
                e
            );
            ProbeOutcome::Unreachable {
                reason: e.to_string(),
            }
        }
    }
}

/// Runs [`probe`] to completion on a throwaway current-thread runtime.
pub fn probe_blocking(url: &str, timeout: Duration) -> crate::error::Result<ProbeOutcome> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(probe(url, timeout)))
}
