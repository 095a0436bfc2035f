// src/core/net.rs

// HTTP GET via ureq. The QS pages are plain documents; no cookies or
// session state are needed, so one shared agent per run is enough.

use std::time::Duration;

use crate::error::ScrapeError;
use crate::params::USER_AGENT;

pub fn build_agent(timeout_secs: u64) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()
}

/// Fetch `url` and return the response body as a String.
/// Non-2xx statuses surface as `ureq::Error::Status` inside `Fetch`.
pub fn get(agent: &ureq::Agent, url: &str) -> Result<String, ScrapeError> {
    let resp = agent.get(url).call().map_err(|e| ScrapeError::Fetch {
        url: url.to_string(),
        source: Box::new(e),
    })?;
    resp.into_string().map_err(|e| ScrapeError::Fetch {
        url: url.to_string(),
        source: Box::new(e),
    })
}
